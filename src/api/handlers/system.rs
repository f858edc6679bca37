//! System handlers: health, fallbacks

use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::AppState;
use crate::api::error::ApiError;
use crate::api::types::*;

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        model_configured: state.transform.is_configured(),
        shared_notes: state.shares.len(),
    })
}

/// Fallback for a known path hit with a verb it does not serve.
/// Bare OPTIONS requests (no CORS preflight headers) get an empty 200.
pub async fn unsupported_method(method: Method) -> Response {
    if method == Method::OPTIONS {
        StatusCode::OK.into_response()
    } else {
        ApiError::MethodNotAllowed.into_response()
    }
}

/// Fallback for unknown paths
pub async fn not_found() -> Response {
    ApiError::NotFound("Not found".to_string()).into_response()
}
