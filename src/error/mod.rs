//! Unified error handling for Address Core

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::schema::SchemaViolation;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
///
/// The store-failure variants deliberately carry distinct status codes
/// per call site (`Unprocessable` for the create path, `BadGateway` for
/// user-facing reads, `Internal` for the admin listing) to preserve the
/// established wire contract.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Schema violation: {0}")]
    Validation(String),

    #[error("Create failed: {0}")]
    Unprocessable(String),

    #[error("Read failed: {0}")]
    BadGateway(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
            AppError::Validation(detail) => (
                StatusCode::BAD_REQUEST,
                "address validation failed".to_string(),
                Some(detail),
            ),
            AppError::Unprocessable(detail) => {
                tracing::error!("Create failed: {}", detail);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "something went wrong at our end".to_string(),
                    None,
                )
            }
            AppError::BadGateway(detail) => {
                tracing::error!("Read failed: {}", detail);
                (
                    StatusCode::BAD_GATEWAY,
                    "sorry, we couldn't complete your request".to_string(),
                    None,
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "a database error occurred".to_string(),
                    None,
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            message,
            error: detail,
        });

        (status, body).into_response()
    }
}

// Schema violations surface as 400s carrying the validator's message
impl From<SchemaViolation> for AppError {
    fn from(violation: SchemaViolation) -> Self {
        AppError::Validation(violation.to_string())
    }
}
