//! Data access layer (Repository pattern)

pub mod address;
pub mod country;

pub use address::{AddressRepository, AddressRepositoryImpl};
pub use country::{CountryRepository, CountryRepositoryImpl};

#[cfg(test)]
pub use address::MockAddressRepository;
#[cfg(test)]
pub use country::MockCountryRepository;
