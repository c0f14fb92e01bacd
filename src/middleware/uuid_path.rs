//! Path-shape check for the single-address routes
//!
//! The original routing only matched `/address/{id}` when the id was a
//! well-formed UUID; anything else fell through to the catch-all. Axum
//! matches the parameterized route for any segment, so this middleware
//! restores the contract: a malformed id answers with the catch-all 404
//! before the access gate or any handler runs.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use uuid::Uuid;

pub async fn require_uuid_path(request: Request<Body>, next: Next) -> Response {
    let segment = request
        .uri()
        .path()
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string();

    if Uuid::parse_str(&segment).is_err() {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": format!("resource [{}] not found", segment) })),
        )
            .into_response();
    }

    next.run(request).await
}
