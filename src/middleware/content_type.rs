//! JSON content-type enforcement
//!
//! Every request to the service must declare a JSON body; anything else
//! is rejected with 400 before any handler logic runs. This applies to
//! reads as well as writes, matching the established wire contract.

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub async fn require_json(request: Request<Body>, next: Next) -> Response {
    let mime = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::trim)
        .unwrap_or("");

    if !mime.eq_ignore_ascii_case("application/json") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "requests must be application/json" })),
        )
            .into_response();
    }

    next.run(request).await
}
