//! Error envelope for HTTP routes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use comparison::ComparisonError;

/// Route errors, rendered as `{"error": "..."}` JSON.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was malformed or failed validation
    #[error("{0}")]
    BadRequest(String),

    /// Generation or packaging failed server-side
    #[error("{0}")]
    Internal(String),
}

impl From<ComparisonError> for ApiError {
    fn from(error: ComparisonError) -> Self {
        match error {
            ComparisonError::InvalidInput { reason } => ApiError::BadRequest(reason),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
