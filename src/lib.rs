//! Address Core - Postal Address Service Backend
//!
//! This crate provides the REST API for managing per-user postal
//! addresses: listing, creating, fetching and deleting addresses, plus a
//! reference lookup of countries. Authorization is delegated to an
//! external access-control service; persistence lives in PostgreSQL.

pub mod api;
pub mod authy;
pub mod config;
pub mod domain;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod repository;
pub mod schema;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
