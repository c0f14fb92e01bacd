//! Liveness endpoint, used by the fronting api_server application

use super::MessageResponse;
use axum::{response::IntoResponse, Json};
use tracing::info;

pub async fn system_running() -> impl IntoResponse {
    info!("status check ok");
    Json(MessageResponse::new("System running..."))
}
