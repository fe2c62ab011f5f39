pub mod create_profile_usecase;
pub mod register_saga_usecase;

use crate::domain::clients::identity_client::IdentityClient;

/// Compensating action shared by both registration flows: one best-effort
/// DELETE of the credentials. A rollback failure is logged and absorbed so
/// the triggering error stays the one the caller sees. Never retried.
pub(crate) async fn rollback_credentials<I>(identity_client: &I, identity: &str)
where
    I: IdentityClient + Send + Sync,
{
    tracing::warn!(%identity, "rolling back credentials");
    match identity_client.delete_credentials(identity).await {
        Ok(()) => tracing::info!(%identity, "credentials rolled back"),
        Err(err) => tracing::error!(%identity, error = %err, "credentials rollback failed"),
    }
}
