use async_trait::async_trait;

use crate::{
    domain::{
        clients::profile_client::ProfileClient,
        error::GatewayError,
        models::{profile::UserProfile, registration::ProfileData},
    },
    infrastructure::downstream::forward,
};

#[derive(Clone)]
pub struct HttpProfileClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpProfileClient {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ProfileClient for HttpProfileClient {
    async fn create_profile(
        &self,
        access_token: &str,
        profile: &ProfileData,
    ) -> Result<UserProfile, GatewayError> {
        let url = format!("{}/api/v1/users/createUser", self.base_url);
        tracing::debug!(%url, "creating user profile in profile service");
        forward(
            self.http
                .post(&url)
                .bearer_auth(access_token)
                .json(profile),
        )
        .await
    }
}
