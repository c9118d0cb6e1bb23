//! Domain error types for the test evidence server.
//!
//! Uses thiserror for ergonomic error handling with automatic Display implementations.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

/// Application-level errors.
///
/// Only two things can go wrong with a request: the payload cannot be read as
/// the expected entity, or the database refuses the read/write.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Payload is malformed or has mismatched field types
    #[error("{0}")]
    Decode(String),

    /// Database operation failed
    #[error("{0}")]
    Persistence(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Decode(msg) => tracing::warn!("Rejected payload: {}", msg),
            AppError::Persistence(msg) => tracing::error!("Database error: {}", msg),
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

/// Error response body matching OpenAPI schema.
#[derive(Debug, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

// Conversion implementations for common error types

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}

impl From<actix_web::error::JsonPayloadError> for AppError {
    fn from(err: actix_web::error::JsonPayloadError) -> Self {
        use actix_web::error::JsonPayloadError;

        match err {
            JsonPayloadError::Deserialize(e) => AppError::from(e),
            other => AppError::Decode(other.to_string()),
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        AppError::Persistence(err.to_string())
    }
}
