//! Dogechain explorer API abstraction layer.
//!
//! Defines the [`DogechainApi`] trait and provides an HTTP implementation
//! ([`HttpApiClient`]) plus a test mock (`mock::MockApi`).

mod http_adapter;
#[cfg(test)]
pub mod mock;

pub use http_adapter::HttpApiClient;

use async_trait::async_trait;

use crate::endpoint::NetHashQuery;
use crate::error::ApiError;
use crate::types::NetHashSample;

/// One method per explorer endpoint.
///
/// Text endpoints return the body unmodified, including remote verdicts such
/// as `CK` or `INVALID(...)`. JSON endpoints return the decoded document.
#[async_trait]
pub trait DogechainApi: Send + Sync {
    /// Transaction counts of the most recent blocks.
    async fn get_transactions(&self) -> Result<serde_json::Value, ApiError>;

    /// Amount ever received minus amount ever sent.
    async fn get_address_balance(&self, address: &str) -> Result<String, ApiError>;

    /// Public key hash encoded in the address.
    async fn address_to_hash(&self, address: &str) -> Result<String, ApiError>;

    /// Version byte for a valid address, or an error code (`X5`, `SZ`, `CK`).
    async fn check_address(&self, address: &str) -> Result<String, ApiError>;

    /// `version:hash`, or `INVALID(version:hash)`.
    async fn decode_address(&self, address: &str) -> Result<String, ApiError>;

    async fn get_block_count(&self) -> Result<String, ApiError>;

    /// Difficulty of the last solved block.
    async fn get_difficulty(&self) -> Result<String, ApiError>;

    async fn get_received_by_address(&self, address: &str) -> Result<String, ApiError>;

    async fn get_sent_by_address(&self, address: &str) -> Result<String, ApiError>;

    /// Amount of currency ever mined.
    async fn get_total_supply(&self) -> Result<String, ApiError>;

    /// Address for a version-prefixed public key hash.
    async fn hash_to_address(&self, hash: &str) -> Result<String, ApiError>;

    /// Difficulty and network hash-rate statistics per block interval.
    async fn get_net_hash(&self, query: NetHashQuery) -> Result<serde_json::Value, ApiError>;

    /// [`get_net_hash`](Self::get_net_hash) decoded into typed rows.
    async fn get_net_hash_samples(
        &self,
        query: NetHashQuery,
    ) -> Result<Vec<NetHashSample>, ApiError> {
        let table = self.get_net_hash(query).await?;
        NetHashSample::from_table(&table)
    }
}
