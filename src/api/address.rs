//! Address API handlers
//!
//! Every write walks the same pipeline: authenticated by the gate,
//! schema-validated, persisted, shaped. Any stage failure short-circuits
//! into an error response; a failed insert rolls back inside the store.

use crate::domain::{AddressListEntry, AddressResponse, NewAddress};
use crate::error::{AppError, Result};
use crate::middleware::AuthUser;
use crate::schema::{self, SchemaKind};
use crate::server::AppState;
use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct AddressListResponse {
    pub addresses: Vec<AddressListEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddressCreatedResponse {
    pub message: String,
    pub address_id: String,
}

/// GET /address — all addresses belonging to the caller
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse> {
    let records = state
        .address_repo
        .list_by_owner(&user.public_id)
        .await
        .map_err(|err| AppError::BadGateway(err.to_string()))?;

    if records.is_empty() {
        return Err(AppError::NotFound(
            "no addresses found for user".to_string(),
        ));
    }

    let addresses = records.into_iter().map(AddressListEntry::from).collect();
    Ok(Json(AddressListResponse { addresses }))
}

/// POST /address — validate and persist a new address for the caller
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) =
        payload.map_err(|_| AppError::BadRequest("request body is not valid JSON".to_string()))?;
    let Value::Object(mut data) = payload else {
        return Err(AppError::BadRequest(
            "request body must be a JSON object".to_string(),
        ));
    };

    // The country code is consumed here; the address schemas never see it.
    let iso_value = data.remove("iso_code").unwrap_or(Value::Null);
    let country_payload = Value::Object(Map::from_iter([(
        "iso_code".to_string(),
        iso_value.clone(),
    )]));
    schema::validate(&country_payload, SchemaKind::Country)?;

    let Value::String(iso_code) = iso_value else {
        return Err(AppError::Validation("iso_code must be a string".to_string()));
    };

    schema::validate(
        &Value::Object(data.clone()),
        SchemaKind::Address {
            country_code: &iso_code,
        },
    )?;

    // Shape has been checked; existence is the store's call.
    let country = state
        .country_repo
        .find_by_iso_code(&iso_code)
        .await
        .map_err(|err| AppError::Unprocessable(err.to_string()))?
        .ok_or_else(|| {
            AppError::BadRequest(format!("country not found for iso code [{}]", iso_code))
        })?;

    let input = NewAddress {
        address_id: Uuid::new_v4().to_string(),
        public_id: user.public_id,
        house_name: string_field(&data, "house_name"),
        house_number: string_field(&data, "house_number"),
        address_line_1: string_field(&data, "address_line_1"),
        address_line_2: string_field(&data, "address_line_2"),
        address_line_3: string_field(&data, "address_line_3"),
        state_region_county: string_field(&data, "state_region_county"),
        country_id: country.id,
        post_zip_code: string_field(&data, "post_zip_code").unwrap_or_default(),
    };

    state
        .address_repo
        .create(&input)
        .await
        .map_err(|err| AppError::Unprocessable(err.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(AddressCreatedResponse {
            message: "address created successfully".to_string(),
            address_id: input.address_id,
        }),
    ))
}

/// GET /address/{address_id} — fetch one address by its public id
///
/// Not owner-scoped: any caller holding the required access level may
/// read any address. The owner id is never part of the response.
pub async fn get_one(
    State(state): State<AppState>,
    Path(address_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let record = state
        .address_repo
        .find_by_address_id(&address_id.to_string())
        .await
        .map_err(|err| AppError::BadGateway(err.to_string()))?;

    let Some(record) = record else {
        return Err(AppError::NotFound(format!(
            "no addresses found for supplied id [{}]",
            address_id
        )));
    };

    Ok(Json(AddressResponse::from(record)))
}

/// DELETE /address/{address_id} — owner-scoped delete
pub async fn delete_one(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(address_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let deleted = state
        .address_repo
        .delete_by_address_id_and_owner(&address_id.to_string(), &user.public_id)
        .await
        .map_err(|err| {
            tracing::error!("Delete failed: {}", err);
            AppError::Unauthorized("that's not happening today".to_string())
        })?;

    // "Nothing matched" and "someone else's address" answer identically:
    // existence of another user's address must not leak.
    if deleted == 0 {
        return Err(AppError::Unauthorized(
            "that's not happening today".to_string(),
        ));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn string_field(data: &Map<String, Value>, key: &str) -> Option<String> {
    data.get(key).and_then(Value::as_str).map(str::to_string)
}
