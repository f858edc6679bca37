//! HTTP error mapping
//!
//! Every failure leaves the API as `{"error": message}` with a status from
//! the service error taxonomy. Causes are logged here or upstream, never sent.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error};

use super::types::ErrorResponse;
use crate::share::ShareError;
use crate::transform::TransformError;

/// Errors returned by HTTP handlers
#[derive(Debug)]
pub enum ApiError {
    /// 400
    Validation(String),
    /// 501
    ServiceUnavailable(String),
    /// 404
    NotFound(String),
    /// 500, message is already safe to show
    Upstream(String),
    /// 405
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::ServiceUnavailable(_) => StatusCode::NOT_IMPLEMENTED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg)
            | Self::ServiceUnavailable(msg)
            | Self::NotFound(msg)
            | Self::Upstream(msg) => msg.as_str(),
            Self::MethodNotAllowed => "Method not allowed",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse::new(self.message()))).into_response()
    }
}

impl From<TransformError> for ApiError {
    fn from(err: TransformError) -> Self {
        let message = err.public_message();
        match err {
            TransformError::Validation(_) => Self::Validation(message),
            TransformError::NotConfigured => Self::ServiceUnavailable(message),
            TransformError::Upstream { .. } => Self::Upstream(message),
        }
    }
}

impl From<ShareError> for ApiError {
    fn from(err: ShareError) -> Self {
        match err {
            ShareError::Validation(msg) => Self::Validation(msg),
            ShareError::NotFound(_) => Self::NotFound("Shared note not found".to_string()),
            ShareError::IdCollision => {
                error!("Share create failed: {}", ShareError::IdCollision);
                Self::Upstream("Failed to create share link".to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!("Rejected request body: {}", rejection.body_text());
        Self::Validation("Invalid JSON body".to_string())
    }
}
