//! Async client for the dogechain.info blockchain-explorer API.
//!
//! [`HttpApiClient`] maps one method to each `q/` endpoint (balances,
//! address checks and decoding, chain statistics) and returns the body as
//! text or decoded JSON. [`lookup`] composes several calls concurrently.

pub mod api;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod lookup;
pub mod types;

#[cfg(test)]
mod test_util;

pub use api::{DogechainApi, HttpApiClient};
pub use config::ApiConfig;
pub use endpoint::{Endpoint, NetHashQuery};
pub use error::ApiError;
pub use types::{AddressCheck, AddressSummary, DecodedAddress, NetHashSample, NetworkStats};
