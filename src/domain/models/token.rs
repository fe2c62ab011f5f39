use serde::{Deserialize, Serialize};

/// Token pair issued by the identity service. Held only for the duration of
/// one saga execution and returned to the caller on full success; never
/// persisted by the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSet {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(rename = "type", default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: i64,
}
