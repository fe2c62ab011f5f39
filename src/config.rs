use std::{net::SocketAddr, time::Duration};

/// Process-wide configuration, read once at startup and passed explicitly
/// into the components that need it. Immutable afterwards.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub identity_service_url: String,
    pub profile_service_url: String,
    /// HMAC secret shared with the identity service, used only to read the
    /// identity claim out of issued tokens.
    pub jwt_secret: String,
    pub internal_api_key: Option<String>,
    pub request_timeout: Duration,
    pub bind_addr: SocketAddr,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let identity_service_url = dotenvy::var("IDENTITY_SERVICE_URL")?;
        let profile_service_url = dotenvy::var("PROFILE_SERVICE_URL")?;
        let jwt_secret = dotenvy::var("JWT_SECRET")?;
        let internal_api_key = dotenvy::var("INTERNAL_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let request_timeout = match dotenvy::var("REQUEST_TIMEOUT_SECS") {
            Ok(value) => Duration::from_secs(value.parse()?),
            Err(_) => Duration::from_secs(10),
        };
        let bind_addr = match dotenvy::var("BIND_ADDR") {
            Ok(value) => value.parse()?,
            Err(_) => SocketAddr::from(([0, 0, 0, 0], 8080)),
        };

        Ok(Self {
            identity_service_url,
            profile_service_url,
            jwt_secret,
            internal_api_key,
            request_timeout,
            bind_addr,
        })
    }
}
