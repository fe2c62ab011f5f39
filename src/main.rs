mod config;
mod domain;
mod infrastructure;
mod presentation;
mod usecase;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::{
    config::GatewayConfig,
    infrastructure::{
        identity_client::HttpIdentityClient, jwt_claim_reader::JwtClaimReader,
        profile_client::HttpProfileClient,
    },
    presentation::handlers::registration_handler::create_gateway_router,
    usecase::{
        create_profile_usecase::CreateProfileUsecase, register_saga_usecase::RegisterSagaUsecase,
    },
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let _ = dotenvy::dotenv();
    let config = GatewayConfig::from_env()?;

    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()?;
    let identity_client = HttpIdentityClient::new(
        http.clone(),
        &config.identity_service_url,
        config.internal_api_key.clone(),
    );
    let profile_client = HttpProfileClient::new(http, &config.profile_service_url);
    let claim_reader = JwtClaimReader::new(config.jwt_secret.clone());

    let register_saga = RegisterSagaUsecase::new(
        identity_client.clone(),
        profile_client.clone(),
        claim_reader.clone(),
    );
    let create_profile = CreateProfileUsecase::new(identity_client, profile_client, claim_reader);

    let app = create_gateway_router(register_saga, create_profile);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "registration gateway listening");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
