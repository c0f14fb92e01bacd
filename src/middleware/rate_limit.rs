//! Rate limiting middleware
//!
//! Sliding-window counters per route and client. The route budget is
//! configured as `"METHOD path"` rules; breaching a rule returns 429.
//! Counters live in process memory: the service is deployed as a single
//! instance per database and the limits are coarse hourly budgets, not
//! billing-grade accounting.

use axum::{
    body::Body,
    extract::{MatchedPath, State},
    http::{HeaderMap, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::{SystemTime, UNIX_EPOCH},
};

/// Rate limit rule specifying requests per time window
#[derive(Debug, Clone)]
pub struct RateLimitRule {
    /// Maximum number of requests allowed
    pub requests: u64,
    /// Time window in seconds
    pub window_secs: u64,
}

impl RateLimitRule {
    pub const fn per_hour(requests: u64) -> Self {
        Self {
            requests,
            window_secs: 3600,
        }
    }

    pub const fn per_minute(requests: u64) -> Self {
        Self {
            requests,
            window_secs: 60,
        }
    }
}

impl Default for RateLimitRule {
    fn default() -> Self {
        Self::per_hour(100)
    }
}

/// Sliding window counter per key
#[derive(Clone)]
struct SlidingWindow {
    /// Map of key -> list of request timestamps (epoch seconds)
    buckets: Arc<Mutex<HashMap<String, Vec<u64>>>>,
}

impl SlidingWindow {
    fn new() -> Self {
        Self {
            buckets: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Check and record a request. Returns `true` if allowed, `false` if
    /// rate-limited.
    fn check(&self, key: &str, rule: &RateLimitRule) -> bool {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let cutoff = now.saturating_sub(rule.window_secs);

        let mut buckets = self.buckets.lock().unwrap_or_else(|e| e.into_inner());
        let timestamps = buckets.entry(key.to_string()).or_default();

        // Evict expired entries
        timestamps.retain(|&ts| ts > cutoff);

        if timestamps.len() as u64 >= rule.requests {
            return false;
        }
        timestamps.push(now);

        // Periodic cleanup: cap total entries to avoid unbounded growth
        if buckets.len() > 10_000 {
            buckets.retain(|_, v| {
                v.retain(|&ts| ts > cutoff);
                !v.is_empty()
            });
        }

        true
    }
}

/// Rate limit state shared across requests
#[derive(Clone)]
pub struct RateLimitState {
    enabled: bool,
    routes: Arc<HashMap<String, RateLimitRule>>,
    default: RateLimitRule,
    window: SlidingWindow,
}

impl RateLimitState {
    pub fn new(enabled: bool, routes: HashMap<String, RateLimitRule>) -> Self {
        Self {
            enabled,
            routes: Arc::new(routes),
            default: RateLimitRule::default(),
            window: SlidingWindow::new(),
        }
    }

    /// The per-route budget for the address API
    pub fn address_defaults(enabled: bool) -> Self {
        let mut routes = HashMap::new();
        routes.insert("GET /address/status".to_string(), RateLimitRule::per_hour(100));
        routes.insert("GET /address".to_string(), RateLimitRule::per_hour(20));
        routes.insert("POST /address".to_string(), RateLimitRule::per_hour(10));
        routes.insert(
            "GET /address/{address_id}".to_string(),
            RateLimitRule::per_hour(100),
        );
        routes.insert(
            "DELETE /address/{address_id}".to_string(),
            RateLimitRule::per_hour(10),
        );
        routes.insert(
            "GET /address/countries".to_string(),
            RateLimitRule::per_hour(100),
        );
        routes.insert(
            "GET /address/admin/address".to_string(),
            RateLimitRule::per_hour(100),
        );
        // smoke-test route: always trips
        routes.insert(
            "GET /address/admin/ratelimited".to_string(),
            RateLimitRule::per_minute(0),
        );
        Self::new(enabled, routes)
    }

    /// Create a no-op rate limit state (for testing or when disabled)
    pub fn noop() -> Self {
        Self::new(false, HashMap::new())
    }

    fn rule_for(&self, method: &str, path: &str) -> &RateLimitRule {
        self.routes
            .get(&format!("{} {}", method, path))
            .unwrap_or(&self.default)
    }
}

/// Rate limiting middleware
pub async fn enforce_rate_limit(
    State(state): State<RateLimitState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if !state.enabled {
        return next.run(request).await;
    }

    // Unrouted requests carry no matched path; they belong to the
    // catch-all and are not counted.
    let Some(matched) = request.extensions().get::<MatchedPath>() else {
        return next.run(request).await;
    };
    let path = matched.as_str().to_string();
    let method = request.method().as_str().to_string();

    let rule = state.rule_for(&method, &path);
    let key = format!("{}:{} {}", client_key(request.headers()), method, path);

    if !state.window.check(&key, rule) {
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "message": "rate limit exceeded" })),
        )
            .into_response();
    }

    next.run(request).await
}

/// Client identity for rate-limiting purposes: first hop of
/// `x-forwarded-for`, then `x-real-ip`, then a shared bucket
fn client_key(headers: &HeaderMap) -> String {
    if let Some(value) = headers.get("x-forwarded-for") {
        if let Ok(forwarded) = value.to_str() {
            if let Some(first) = forwarded.split(',').next() {
                let trimmed = first.trim();
                if !trimmed.is_empty() {
                    return trimmed.to_string();
                }
            }
        }
    }

    if let Some(value) = headers.get("x-real-ip") {
        if let Ok(real_ip) = value.to_str() {
            if !real_ip.trim().is_empty() {
                return real_ip.trim().to_string();
            }
        }
    }

    "unknown".to_string()
}
