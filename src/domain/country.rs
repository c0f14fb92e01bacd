//! Country reference model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Country entity
///
/// Rows are loaded by an administrative bulk process or test fixtures and
/// are never mutated through the public API. `iso_code` is the external
/// identifier: exactly three uppercase letters, unique.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Country {
    pub id: i32,
    pub name: String,
    pub iso_code: String,
}

/// Allow-listed country fields returned by the public listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryResponse {
    pub name: String,
    pub iso_code: String,
}

impl From<Country> for CountryResponse {
    fn from(country: Country) -> Self {
        Self {
            name: country.name,
            iso_code: country.iso_code,
        }
    }
}
