use crate::{
    domain::{
        clients::{identity_client::IdentityClient, profile_client::ProfileClient},
        error::GatewayError,
        models::{profile::UserProfile, registration::ProfileData},
        services::claim_service::ClaimReader,
    },
    usecase::rollback_credentials,
};

/// Deprecated profile-only flow: the caller already holds a token from an
/// earlier login and only the profile-creation step runs, with the same
/// compensation as the full saga on failure. Kept for clients of the old
/// two-request registration.
pub struct CreateProfileUsecase<I: IdentityClient, P: ProfileClient, C: ClaimReader> {
    identity_client: I,
    profile_client: P,
    claim_reader: C,
}

impl<I, P, C> CreateProfileUsecase<I, P, C>
where
    I: IdentityClient + Send + Sync,
    P: ProfileClient + Send + Sync,
    C: ClaimReader,
{
    pub fn new(identity_client: I, profile_client: P, claim_reader: C) -> Self {
        Self {
            identity_client,
            profile_client,
            claim_reader,
        }
    }

    pub async fn create_profile(
        &self,
        access_token: &str,
        profile_data: ProfileData,
    ) -> Result<UserProfile, GatewayError> {
        profile_data.validate()?;

        let Some(identity) = self.claim_reader.extract_identity(access_token) else {
            return Err(GatewayError::IdentityExtraction);
        };
        tracing::info!(%identity, "creating user profile");

        match self
            .profile_client
            .create_profile(access_token, &profile_data)
            .await
        {
            Ok(profile) => Ok(profile),
            Err(err) => {
                tracing::error!(%identity, error = %err, "profile creation failed");
                rollback_credentials(&self.identity_client, &identity).await;
                Err(GatewayError::rolled_back("Profile creation", err))
            }
        }
    }
}
