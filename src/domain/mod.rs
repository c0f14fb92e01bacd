//! Domain models

mod address;
mod country;

pub use address::{AddressListEntry, AddressRecord, AddressResponse, NewAddress};
pub use country::{Country, CountryResponse};
