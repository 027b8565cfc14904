/// Error handling for the API server
///
/// A unified error type that maps to the uniform error envelope
/// `{"status": "error", "message": "..."}` with an appropriate HTTP status
/// code. Handlers return `ApiResult<T>`, and every fallible operation is
/// converted here; nothing propagates to the transport layer as a raw
/// fault or stack trace.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Malformed or missing request input (400)
    BadRequest(String),

    /// Authentication failure (401) - always a generic message
    Unauthorized(String),

    /// Domain conflict (409) - e.g., duplicate user on register
    Conflict(String),

    /// Store-layer failure (500) - surfaced with the underlying diagnostic
    Database(String),
}

/// Error envelope body
///
/// Matches the success envelope shape: `status` discriminator plus a
/// human-readable `message`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Always `"error"`
    pub status: String,

    /// Human-readable error message
    pub message: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Database(msg) => {
                tracing::error!("Store-layer failure: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(ErrorEnvelope {
            status: "error".to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Convert sqlx errors to API errors
///
/// Every store-layer failure surfaces as an error envelope carrying the
/// underlying diagnostic text.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Database(err.to_string())
    }
}

/// Convert password hashing errors to API errors
impl From<taskdesk_shared::auth::password::PasswordError> for ApiError {
    fn from(err: taskdesk_shared::auth::password::PasswordError) -> Self {
        ApiError::Database(format!("Password operation failed: {}", err))
    }
}
