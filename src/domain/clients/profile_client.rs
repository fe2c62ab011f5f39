use async_trait::async_trait;

use crate::domain::{
    error::GatewayError,
    models::{profile::UserProfile, registration::ProfileData},
};

/// Remote profile service.
#[async_trait]
pub trait ProfileClient {
    /// Creates a profile for the identity encoded in the bearer token.
    async fn create_profile(
        &self,
        access_token: &str,
        profile: &ProfileData,
    ) -> Result<UserProfile, GatewayError>;
}
