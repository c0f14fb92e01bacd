//! Address domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One address row joined with its country, as selected by the store
///
/// Carries everything the store knows about an address, including the
/// owner id and creation timestamp. Response shaping decides what of
/// this leaves the service.
#[derive(Debug, Clone, FromRow)]
pub struct AddressRecord {
    pub address_id: String,
    pub public_id: String,
    pub house_name: Option<String>,
    pub house_number: Option<String>,
    pub address_line_1: Option<String>,
    pub address_line_2: Option<String>,
    pub address_line_3: Option<String>,
    pub state_region_county: Option<String>,
    pub country_name: String,
    pub country_iso: String,
    pub post_zip_code: Option<String>,
    pub created: DateTime<Utc>,
}

/// Input for persisting a new address
///
/// `address_id` is assigned by the service at creation and never reused;
/// `public_id` is the gate-resolved caller identity, never the body's.
#[derive(Debug, Clone)]
pub struct NewAddress {
    pub address_id: String,
    pub public_id: String,
    pub house_name: Option<String>,
    pub house_number: Option<String>,
    pub address_line_1: Option<String>,
    pub address_line_2: Option<String>,
    pub address_line_3: Option<String>,
    pub state_region_county: Option<String>,
    pub country_id: i32,
    pub post_zip_code: String,
}

/// Allow-listed fields for a single-address read
///
/// Surrogate keys, the owner id and the creation timestamp are
/// deliberately absent: nothing internal is echoed back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressResponse {
    pub house_name: Option<String>,
    pub house_number: Option<String>,
    pub address_line_1: Option<String>,
    pub address_line_2: Option<String>,
    pub address_line_3: Option<String>,
    pub state_region_county: Option<String>,
    pub country: String,
    pub country_code: String,
    pub post_zip_code: Option<String>,
}

impl From<AddressRecord> for AddressResponse {
    fn from(record: AddressRecord) -> Self {
        Self {
            house_name: record.house_name,
            house_number: record.house_number,
            address_line_1: record.address_line_1,
            address_line_2: record.address_line_2,
            address_line_3: record.address_line_3,
            state_region_county: record.state_region_county,
            country: record.country_name,
            country_code: record.country_iso,
            post_zip_code: record.post_zip_code,
        }
    }
}

/// List and admin-list entry: the single-read allow-list plus the public
/// address id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressListEntry {
    pub address_id: String,
    #[serde(flatten)]
    pub address: AddressResponse,
}

impl From<AddressRecord> for AddressListEntry {
    fn from(record: AddressRecord) -> Self {
        Self {
            address_id: record.address_id.clone(),
            address: AddressResponse::from(record),
        }
    }
}
