//! Access-control service client
//!
//! Authorization is delegated to an external "authy" service: each
//! protected request's token is exchanged for the caller's public
//! identity at a required access level.

mod client;

pub use client::{AccessChecker, AuthyClient};

#[cfg(test)]
pub use client::MockAccessChecker;
