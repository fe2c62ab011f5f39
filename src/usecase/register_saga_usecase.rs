use crate::{
    domain::{
        clients::{identity_client::IdentityClient, profile_client::ProfileClient},
        error::GatewayError,
        models::registration::{RegisterOutcome, RegisterRequest},
        services::claim_service::ClaimReader,
    },
    usecase::rollback_credentials,
};

/// Orchestrates user registration across the identity and profile services
/// as a compensating saga:
///
/// 1. create credentials in the identity service
/// 2. login for a fresh token set (only when profile data was supplied)
/// 3. create the profile in the profile service
///
/// When step 2 or 3 fails after step 1 committed, the credentials are
/// deleted again (best effort, single attempt) and the failure is surfaced
/// wrapped in [`GatewayError::RolledBack`]. All state is local to one call;
/// nothing is shared across concurrent registrations.
pub struct RegisterSagaUsecase<I: IdentityClient, P: ProfileClient, C: ClaimReader> {
    identity_client: I,
    profile_client: P,
    claim_reader: C,
}

impl<I, P, C> RegisterSagaUsecase<I, P, C>
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

    pub async fn register(
        &self,
        request: RegisterRequest,
    ) -> Result<RegisterOutcome, GatewayError> {
        tracing::info!(login = %request.login, "starting user registration");

        // Rejected before any remote call; a partial set of profile fields
        // is a validation error, a fully absent one selects the
        // credentials-only path below.
        let profile_data = request.validate()?;

        // Step 1: create credentials. The registration-time token set is
        // discarded; a fresh login is always performed before the profile
        // call. A failure here needs no compensation.
        self.identity_client
            .register(&request.login, &request.password, request.role())
            .await?;

        let Some(profile_data) = profile_data else {
            tracing::info!(login = %request.login, "credentials registered, no profile data supplied");
            return Ok(RegisterOutcome::credentials_only());
        };

        // Step 2: login for a token scoped to the new identity.
        let tokens = match self
            .identity_client
            .login(&request.login, &request.password)
            .await
        {
            Ok(tokens) => tokens,
            Err(err) => {
                tracing::error!(login = %request.login, error = %err, "login failed after credentials creation");
                return Err(self.compensate(&request.login, "Login", err).await);
            }
        };

        // Step 3: create the profile, addressed by the identity claim in the
        // fresh token. Never attempted without a resolvable identity.
        let Some(identity) = self.claim_reader.extract_identity(&tokens.access_token) else {
            tracing::error!(login = %request.login, "could not extract identity from freshly issued token");
            return Err(self
                .compensate(&request.login, "Profile creation", GatewayError::IdentityExtraction)
                .await);
        };

        let profile = match self
            .profile_client
            .create_profile(&tokens.access_token, &profile_data)
            .await
        {
            Ok(profile) => profile,
            Err(err) => {
                tracing::error!(%identity, error = %err, "profile creation failed");
                return Err(self.compensate(&request.login, "Profile creation", err).await);
            }
        };

        tracing::info!(login = %request.login, user = profile.id, "user registered with profile");
        Ok(RegisterOutcome::with_profile(profile, tokens))
    }

    /// Runs the compensating delete and wraps the triggering error. Only ever
    /// reached after credentials creation succeeded.
    async fn compensate(
        &self,
        login: &str,
        step: &'static str,
        cause: GatewayError,
    ) -> GatewayError {
        rollback_credentials(&self.identity_client, login).await;
        GatewayError::rolled_back(step, cause)
    }
}
