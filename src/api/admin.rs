//! Admin API handlers

use super::MessageResponse;
use crate::domain::AddressListEntry;
use crate::error::{AppError, Result};
use crate::server::AppState;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

/// Pagination query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page", deserialize_with = "deserialize_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

/// Reject page values less than 1
fn deserialize_page<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = i64::deserialize(deserializer)?;
    if value < 1 {
        return Err(serde::de::Error::custom(
            "page must be a positive integer (>= 1)",
        ));
    }
    Ok(value)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdminAddressListResponse {
    pub addresses: Vec<AddressListEntry>,
    pub total_records: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_url: Option<String>,
}

/// GET /address/admin/address — paginated listing across all owners
pub async fn list_all(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    let per_page = state.config.addresses_per_page;

    let (records, total_records) = state
        .address_repo
        .list_all_paginated(query.page, per_page)
        .await
        .map_err(|err| AppError::Internal(anyhow::anyhow!("admin listing failed: {}", err)))?;

    if records.is_empty() {
        return Err(AppError::NotFound(
            "no addresses found for user".to_string(),
        ));
    }

    let mut response = AdminAddressListResponse {
        addresses: records.into_iter().map(AddressListEntry::from).collect(),
        total_records,
        next_url: None,
        prev_url: None,
    };

    if query.page * per_page < total_records {
        response.next_url = Some(format!("/address/admin/address?page={}", query.page + 1));
    }
    if query.page > 1 {
        response.prev_url = Some(format!("/address/admin/address?page={}", query.page - 1));
    }

    Ok(Json(response))
}

/// GET /address/admin/ratelimited — rate-limit smoke test
///
/// The route's budget is zero requests per minute, so the limiter answers
/// 429 before this handler ever runs.
pub async fn rate_limited() -> impl IntoResponse {
    Json(MessageResponse::new("should never see this"))
}
