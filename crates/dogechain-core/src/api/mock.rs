use std::collections::HashMap;

use async_trait::async_trait;

use crate::endpoint::{Endpoint, NetHashQuery};
use crate::error::ApiError;

use super::DogechainApi;

/// A mock explorer backend for testing. Returns canned bodies keyed by the
/// rendered endpoint, populated via the builder pattern. Unknown endpoints
/// answer like a 404 from the real server.
pub struct MockApi {
    bodies: HashMap<String, String>,
}

impl MockApi {
    pub fn builder() -> MockApiBuilder {
        MockApiBuilder {
            bodies: HashMap::new(),
        }
    }

    fn text(&self, endpoint: Endpoint) -> Result<String, ApiError> {
        let key = endpoint.to_string();
        self.bodies.get(&key).cloned().ok_or(ApiError::Status {
            status: 404,
            body: format!("no canned body for {key}"),
        })
    }

    fn json(&self, endpoint: Endpoint) -> Result<serde_json::Value, ApiError> {
        let body = self.text(endpoint)?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode {
            message: e.to_string(),
            body,
        })
    }
}

pub struct MockApiBuilder {
    bodies: HashMap<String, String>,
}

impl MockApiBuilder {
    pub fn with_body(mut self, endpoint: Endpoint, body: &str) -> Self {
        self.bodies.insert(endpoint.to_string(), body.to_owned());
        self
    }

    pub fn build(self) -> MockApi {
        MockApi {
            bodies: self.bodies,
        }
    }
}

#[async_trait]
impl DogechainApi for MockApi {
    async fn get_transactions(&self) -> Result<serde_json::Value, ApiError> {
        self.json(Endpoint::transactions())
    }

    async fn get_address_balance(&self, address: &str) -> Result<String, ApiError> {
        self.text(Endpoint::address_balance(address))
    }

    async fn address_to_hash(&self, address: &str) -> Result<String, ApiError> {
        self.text(Endpoint::address_to_hash(address))
    }

    async fn check_address(&self, address: &str) -> Result<String, ApiError> {
        self.text(Endpoint::check_address(address))
    }

    async fn decode_address(&self, address: &str) -> Result<String, ApiError> {
        self.text(Endpoint::decode_address(address))
    }

    async fn get_block_count(&self) -> Result<String, ApiError> {
        self.text(Endpoint::block_count())
    }

    async fn get_difficulty(&self) -> Result<String, ApiError> {
        self.text(Endpoint::difficulty())
    }

    async fn get_received_by_address(&self, address: &str) -> Result<String, ApiError> {
        self.text(Endpoint::received_by_address(address))
    }

    async fn get_sent_by_address(&self, address: &str) -> Result<String, ApiError> {
        self.text(Endpoint::sent_by_address(address))
    }

    async fn get_total_supply(&self) -> Result<String, ApiError> {
        self.text(Endpoint::total_supply())
    }

    async fn hash_to_address(&self, hash: &str) -> Result<String, ApiError> {
        self.text(Endpoint::hash_to_address(hash))
    }

    async fn get_net_hash(&self, query: NetHashQuery) -> Result<serde_json::Value, ApiError> {
        self.json(Endpoint::net_hash(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::*;

    #[tokio::test]
    async fn unknown_endpoint_reports_404() {
        let api = MockApi::builder().build();
        let err = api.get_block_count().await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn net_hash_samples_default_method_decodes_rows() {
        let query = NetHashQuery {
            interval: 500,
            ..NetHashQuery::default()
        };
        let api = MockApi::builder()
            .with_body(Endpoint::net_hash(query), NET_HASH_BODY)
            .build();
        let samples = api.get_net_hash_samples(query).await.unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[1].block_number, 171_500);
    }

    #[tokio::test]
    async fn malformed_json_is_a_decode_error() {
        let api = MockApi::builder()
            .with_body(Endpoint::transactions(), "<html>maintenance</html>")
            .build();
        let err = api.get_transactions().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { ref body, .. } if body.contains("maintenance")));
    }

    #[tokio::test]
    async fn remote_verdicts_pass_through() {
        let api = MockApi::builder()
            .with_body(
                Endpoint::decode_address(ADDRESS),
                "INVALID(00:c88429cd65ccfd625a469306eb13411e350eb5e5)",
            )
            .build();
        let body = api.decode_address(ADDRESS).await.unwrap();
        assert_eq!(body, "INVALID(00:c88429cd65ccfd625a469306eb13411e350eb5e5)");
    }
}
