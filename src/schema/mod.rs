//! Declarative payload validation against embedded JSON Schema documents
//!
//! Address submissions are checked against one of two structural schema
//! variants: a UK-specific document when the submitted country code is
//! `GBR` and a default document otherwise. Country codes themselves are
//! checked against a separate document. Validation stops at the first
//! violation and surfaces its message verbatim.

use jsonschema::{validator_for, Validator};
use lazy_static::lazy_static;
use serde_json::Value;
use thiserror::Error;

/// Country code that selects the UK-specific address schema variant
pub const UK_ISO_CODE: &str = "GBR";

const COUNTRY_DOCUMENT: &str = include_str!("documents/countries.json");
const ADDRESS_DEFAULT_DOCUMENT: &str = include_str!("documents/address_default.json");
const ADDRESS_GBR_DOCUMENT: &str = include_str!("documents/address_gbr.json");

lazy_static! {
    static ref COUNTRY: Validator = compile(COUNTRY_DOCUMENT);
    static ref ADDRESS_DEFAULT: Validator = compile(ADDRESS_DEFAULT_DOCUMENT);
    static ref ADDRESS_GBR: Validator = compile(ADDRESS_GBR_DOCUMENT);
}

fn compile(document: &str) -> Validator {
    let schema: Value = serde_json::from_str(document).expect("embedded schema is valid JSON");
    validator_for(&schema).expect("embedded schema is a valid draft-07 document")
}

/// First structural violation found in a payload. The message is
/// human-readable and suitable for direct inclusion in an API error body.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct SchemaViolation(String);

/// Which structural ruleset applies to a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind<'a> {
    /// The country-code shape check applied ahead of an address submission
    Country,
    /// An address payload, already stripped of its `iso_code` field,
    /// validated against the variant selected by that code
    Address { country_code: &'a str },
}

/// Validate `payload` against the schema selected by `kind`.
///
/// Address payloads must have their `iso_code` consumed by the caller
/// beforehand; the address documents treat it as an unknown field.
pub fn validate(payload: &Value, kind: SchemaKind<'_>) -> Result<(), SchemaViolation> {
    let validator: &Validator = match kind {
        SchemaKind::Country => &COUNTRY,
        SchemaKind::Address { country_code } if country_code == UK_ISO_CODE => &ADDRESS_GBR,
        SchemaKind::Address { .. } => &ADDRESS_DEFAULT,
    };

    validator
        .validate(payload)
        .map_err(|err| SchemaViolation(err.to_string()))
}
