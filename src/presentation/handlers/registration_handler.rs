use std::sync::Arc;

use axum::{
    Json, Router,
    body::Body,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        clients::{identity_client::IdentityClient, profile_client::ProfileClient},
        error::GatewayError,
        models::registration::{ProfileData, RegisterRequest},
        services::claim_service::ClaimReader,
    },
    usecase::{
        create_profile_usecase::CreateProfileUsecase, register_saga_usecase::RegisterSagaUsecase,
    },
};

// Request

/// json for the deprecated profile-only flow; the identity comes from the
/// bearer token, not the body
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
}

// Response

/// json body for 400/500 responses
#[derive(Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/* Router Function and Handler Function */

// Gateway Router

/// function return Router object
/// Suppose to be mounted by main router

pub fn create_gateway_router<
    I: IdentityClient + Send + Sync + 'static + Clone,
    P: ProfileClient + Send + Sync + 'static + Clone,
    C: ClaimReader + Send + Sync + 'static + Clone,
>(
    register_saga: RegisterSagaUsecase<I, P, C>,
    create_profile: CreateProfileUsecase<I, P, C>,
) -> Router {
    let state = AppState {
        register_saga: Arc::new(register_saga),
        create_profile: Arc::new(create_profile),
    };

    Router::new()
        .route("/register", post(register::<I, P, C>))
        .route("/createUser", post(create_user::<I, P, C>))
        .with_state(state)
}

#[derive(Clone)]
pub struct AppState<I: IdentityClient, P: ProfileClient, C: ClaimReader> {
    pub register_saga: Arc<RegisterSagaUsecase<I, P, C>>,
    pub create_profile: Arc<CreateProfileUsecase<I, P, C>>,
}

// handler function

/// handler function for the full registration saga
async fn register<
    I: IdentityClient + Send + Sync,
    P: ProfileClient + Send + Sync,
    C: ClaimReader,
>(
    State(state): State<AppState<I, P, C>>,
    Json(payload): Json<RegisterRequest>,
) -> Response {
    match state.register_saga.register(payload).await {
        Ok(outcome) => (StatusCode::CREATED, Json(outcome)).into_response(),
        Err(err) => error_response(err),
    }
}

/// handler function for the deprecated profile-only flow
async fn create_user<
    I: IdentityClient + Send + Sync,
    P: ProfileClient + Send + Sync,
    C: ClaimReader,
>(
    State(state): State<AppState<I, P, C>>,
    headers: HeaderMap,
    Json(payload): Json<CreateUserRequest>,
) -> Response {
    let Some(token) = bearer_token(&headers) else {
        return error_response(GatewayError::IdentityExtraction);
    };
    let profile_data = ProfileData {
        first_name: payload.first_name,
        last_name: payload.last_name,
        birth_date: payload.birth_date,
    };
    match state.create_profile.create_profile(token, profile_data).await {
        Ok(profile) => (StatusCode::CREATED, Json(profile)).into_response(),
        Err(err) => error_response(err),
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Exhaustive mapping of orchestrator errors to caller-visible responses.
/// Downstream failures pass through with the original status, body and
/// content type; everything that already triggered (or skipped) compensation
/// is a 500 with a descriptive message.
fn error_response(err: GatewayError) -> Response {
    match err {
        GatewayError::Validation(message) => {
            (StatusCode::BAD_REQUEST, Json(ErrorBody { message })).into_response()
        }
        GatewayError::Downstream {
            status,
            body,
            content_type,
        } => {
            let status =
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            Response::builder()
                .status(status)
                .header(
                    header::CONTENT_TYPE,
                    content_type.as_deref().unwrap_or("application/json"),
                )
                .body(Body::from(body))
                .unwrap_or_else(|_| status.into_response())
        }
        err @ (GatewayError::Transport(_)
        | GatewayError::IdentityExtraction
        | GatewayError::RolledBack { .. }) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                message: err.to_string(),
            }),
        )
            .into_response(),
    }
}
