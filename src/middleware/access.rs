//! Access gate middleware for protected routes
//!
//! Wraps a route group with a required access level: the caller's token
//! is extracted from the `x-access-token` header and resolved against the
//! access-control service; the resulting identity is injected into the
//! request for handlers. The gate holds no state beyond its checker and
//! fails closed on every authorization error.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::authy::AccessChecker;

/// Header carrying the caller's token
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";

/// Resolved caller identity, injected into request extensions by the gate
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Opaque identifier of the authenticated user
    pub public_id: String,
}

/// Gate state for one protected route group
#[derive(Clone)]
pub struct AccessGate {
    checker: Arc<dyn AccessChecker>,
    access_level: u8,
}

impl AccessGate {
    pub fn new(checker: Arc<dyn AccessChecker>, access_level: u8) -> Self {
        Self {
            checker,
            access_level,
        }
    }
}

/// Access enforcement middleware
///
/// Requests without a token are rejected before any outbound call; a
/// non-success answer from the access-control service, or a success
/// answer without an identity, is rejected the same way.
pub async fn require_access(
    State(gate): State<AccessGate>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let token = match request
        .headers()
        .get(ACCESS_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        Some(token) if !token.is_empty() => token.to_string(),
        _ => return unauthorized_response("missing access token"),
    };

    let public_id = match gate.checker.check_access(&token, gate.access_level).await {
        Ok(public_id) => public_id,
        Err(_) => return unauthorized_response("access denied"),
    };

    request.extensions_mut().insert(AuthUser { public_id });
    next.run(request).await
}

/// Generate a 401 Unauthorized response
fn unauthorized_response(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "message": message })),
    )
        .into_response()
}
