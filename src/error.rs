//! Error types for the greeting service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

// == App Error Enum ==
/// Unified error type for the greeting service.
#[derive(Error, Debug)]
pub enum AppError {
    /// The name path parameter failed validation
    #[error("Invalid name: {0}")]
    InvalidName(String),

    /// The store returned a connectivity or protocol error
    #[error("Store error: {0}")]
    Store(#[from] redis::RedisError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidName(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Store(err) => {
                // Store failures are logged process-wide and surfaced as a
                // generic server error, never retried.
                error!("Store error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "store request failed".to_string(),
                )
            }
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the greeting service.
pub type Result<T> = std::result::Result<T, AppError>;
