use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Profile record owned by the profile service, deserialized verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub cards: Vec<CardInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInfo {
    pub id: i64,
    pub user_id: i64,
    pub number: String,
    pub holder: String,
    pub expiration_date: NaiveDate,
}
