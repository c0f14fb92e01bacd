//! REST API handlers and shared response types

pub mod address;
pub mod admin;
pub mod country;
pub mod status;

use axum::{http::StatusCode, http::Uri, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

/// Message-only response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Catch-all for unrecognized paths and methods
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    let resource = uri
        .path()
        .strip_prefix("/address/")
        .unwrap_or_else(|| uri.path());

    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse::new(format!(
            "resource [{}] not found",
            resource
        ))),
    )
}
