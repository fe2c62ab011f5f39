use reqwest::{RequestBuilder, Response, header};
use serde::de::DeserializeOwned;

use crate::domain::error::GatewayError;

/// Sends one prepared request and deserializes the response body.
///
/// Non-2xx responses become [`GatewayError::Downstream`] carrying the status,
/// raw body text and content type exactly as the service produced them; the
/// failure is not reclassified here. A request that never completes becomes
/// [`GatewayError::Transport`].
pub async fn forward<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, GatewayError> {
    let response = request.send().await.map_err(transport)?;
    let response = require_success(response).await?;
    response.json::<T>().await.map_err(transport)
}

/// Same as [`forward`] for calls whose response body is irrelevant (DELETE).
pub async fn forward_bodiless(request: RequestBuilder) -> Result<(), GatewayError> {
    let response = request.send().await.map_err(transport)?;
    require_success(response).await?;
    Ok(())
}

async fn require_success(response: Response) -> Result<Response, GatewayError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = response.text().await.unwrap_or_default();
    Err(GatewayError::Downstream {
        status,
        body,
        content_type,
    })
}

fn transport(err: reqwest::Error) -> GatewayError {
    GatewayError::Transport(err.to_string())
}
