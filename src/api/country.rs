//! Country reference listing

use crate::domain::CountryResponse;
use crate::error::Result;
use crate::server::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct CountriesResponse {
    pub countries: Vec<CountryResponse>,
}

/// GET /address/countries — all country names and 3-alpha ISO codes
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let countries = state
        .country_repo
        .list_all()
        .await?
        .into_iter()
        .map(CountryResponse::from)
        .collect();

    Ok(Json(CountriesResponse { countries }))
}
