//! HTTP middleware: content-type gate, access gate, rate limiting,
//! path-shape checks

pub mod access;
pub mod content_type;
pub mod rate_limit;
pub mod uuid_path;

pub use access::{require_access, AccessGate, AuthUser};
pub use rate_limit::{enforce_rate_limit, RateLimitRule, RateLimitState};
