use async_trait::async_trait;
use serde_json::json;

use crate::{
    domain::{clients::identity_client::IdentityClient, error::GatewayError, models::token::TokenSet},
    infrastructure::downstream::{forward, forward_bodiless},
};

const INTERNAL_API_KEY_HEADER: &str = "X-Internal-Api-Key";

#[derive(Clone)]
pub struct HttpIdentityClient {
    http: reqwest::Client,
    base_url: String,
    internal_api_key: Option<String>,
}

impl HttpIdentityClient {
    pub fn new(http: reqwest::Client, base_url: &str, internal_api_key: Option<String>) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            internal_api_key: internal_api_key.filter(|key| !key.trim().is_empty()),
        }
    }
}

#[async_trait]
impl IdentityClient for HttpIdentityClient {
    async fn register(
        &self,
        login: &str,
        password: &str,
        role: &str,
    ) -> Result<TokenSet, GatewayError> {
        let url = format!("{}/auth/v1/register", self.base_url);
        tracing::debug!(%url, "creating credentials in identity service");
        forward(self.http.post(&url).json(&json!({
            "login": login,
            "password": password,
            "role": role,
        })))
        .await
    }

    async fn login(&self, login: &str, password: &str) -> Result<TokenSet, GatewayError> {
        let url = format!("{}/auth/v1/login", self.base_url);
        tracing::debug!(%url, "logging in user");
        forward(self.http.post(&url).json(&json!({
            "login": login,
            "password": password,
        })))
        .await
    }

    async fn delete_credentials(&self, identity: &str) -> Result<(), GatewayError> {
        let url = format!("{}/auth/v1/internal/sync/users/{identity}", self.base_url);
        tracing::debug!(%url, "deleting credentials in identity service");
        let mut request = self.http.delete(&url);
        if let Some(key) = &self.internal_api_key {
            request = request.header(INTERNAL_API_KEY_HEADER, key);
        }
        forward_bodiless(request).await
    }
}
