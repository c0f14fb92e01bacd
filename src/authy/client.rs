//! HTTP client for the authy access-control service

use crate::config::CheckAccessConfig;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

/// Verifies a caller's token against the access-control service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccessChecker: Send + Sync {
    /// Exchange `token` for the caller's public id, requiring at least
    /// `access_level`. Fails closed: every failure mode, including a
    /// transport error, maps to `Unauthorized`. Never retried.
    async fn check_access(&self, token: &str, access_level: u8) -> Result<String>;
}

/// Access-control service client
#[derive(Clone)]
pub struct AuthyClient {
    base_url: String,
    http_client: Client,
}

#[derive(Debug, Deserialize)]
struct CheckAccessResponse {
    public_id: Option<String>,
}

impl AuthyClient {
    /// Create a new client for the configured service
    pub fn new(config: &CheckAccessConfig) -> Self {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
        }
    }
}

#[async_trait]
impl AccessChecker for AuthyClient {
    async fn check_access(&self, token: &str, access_level: u8) -> Result<String> {
        let url = format!("{}/authy/checkaccess/{}", self.base_url, access_level);

        let response = self
            .http_client
            .get(&url)
            .header("Content-Type", "application/json")
            .header("x-access-token", token)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Access check request failed: {}", e);
                AppError::Unauthorized("access denied".to_string())
            })?;

        if response.status() != StatusCode::OK {
            return Err(AppError::Unauthorized("access denied".to_string()));
        }

        let body: CheckAccessResponse = response
            .json()
            .await
            .map_err(|_| AppError::Unauthorized("access denied".to_string()))?;

        body.public_id
            .ok_or_else(|| AppError::Unauthorized("no public_id returned".to_string()))
    }
}
