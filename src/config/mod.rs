//! Configuration management for Address Core

use anyhow::{Context, Result};
use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server host
    pub http_host: String,
    /// HTTP server port
    pub http_port: u16,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Access-control service configuration
    pub check_access: CheckAccessConfig,
    /// Addresses returned per page on the admin listing
    pub addresses_per_page: i64,
    /// Secret key for cookie signing by the fronting layer
    pub secret_key: String,
    /// Rate limiting configuration
    pub rate_limit: RateLimitConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Where and how to reach the external access-control service
#[derive(Debug, Clone)]
pub struct CheckAccessConfig {
    /// Base URL of the service (e.g. http://authy:8080)
    pub base_url: String,
    /// Outbound request timeout in seconds
    pub timeout_secs: u64,
}

/// Rate limiting configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Whether rate limiting is enabled
    pub enabled: bool,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            http_host: env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            http_port: env::var("HTTP_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid HTTP_PORT")?,
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").context("DATABASE_URL is required")?,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .unwrap_or(10),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .unwrap_or_else(|_| "2".to_string())
                    .parse()
                    .unwrap_or(2),
            },
            check_access: CheckAccessConfig {
                base_url: env::var("CHECK_ACCESS_URL").context("CHECK_ACCESS_URL is required")?,
                timeout_secs: env::var("CHECK_ACCESS_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .unwrap_or(10),
            },
            addresses_per_page: env::var("ADDRESS_LIMIT_PER_PAGE")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("Invalid ADDRESS_LIMIT_PER_PAGE")?,
            secret_key: env::var("SECRET_KEY").context("SECRET_KEY is required")?,
            rate_limit: RateLimitConfig {
                enabled: env::var("RATE_LIMIT_ENABLED")
                    .map(|s| s.to_lowercase() != "false")
                    .unwrap_or(true),
            },
        })
    }

    /// Get HTTP server address
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

#[cfg(test)]
impl Config {
    /// Test configuration: test database target and a two-address admin
    /// page, mirroring the deployed defaults otherwise.
    pub(crate) fn for_tests() -> Self {
        Self {
            http_host: "127.0.0.1".to_string(),
            http_port: 8080,
            database: DatabaseConfig {
                url: "postgres://localhost/address_test".to_string(),
                max_connections: 10,
                min_connections: 2,
            },
            check_access: CheckAccessConfig {
                base_url: "http://localhost:8081".to_string(),
                timeout_secs: 10,
            },
            addresses_per_page: 2,
            secret_key: "test-secret".to_string(),
            rate_limit: RateLimitConfig { enabled: true },
        }
    }
}
