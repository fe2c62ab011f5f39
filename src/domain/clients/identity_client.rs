use async_trait::async_trait;

use crate::domain::{error::GatewayError, models::token::TokenSet};

/// Remote identity/credentials service. The gateway never inspects the
/// credentials record itself, only whether each call succeeded.
#[async_trait]
pub trait IdentityClient {
    /// Creates credentials for a new login. The identity service answers
    /// with a registration-time token set.
    async fn register(
        &self,
        login: &str,
        password: &str,
        role: &str,
    ) -> Result<TokenSet, GatewayError>;

    /// Obtains a fresh token set for an existing login.
    async fn login(&self, login: &str, password: &str) -> Result<TokenSet, GatewayError>;

    /// Deletes the credentials for an identity. Idempotent on the service
    /// side; used as the saga's compensating action.
    async fn delete_credentials(&self, identity: &str) -> Result<(), GatewayError>;
}
