use async_trait::async_trait;
use reqwest::{header, Url};
use tracing::{debug, trace};

use crate::config::ApiConfig;
use crate::endpoint::{Endpoint, NetHashQuery};
use crate::error::ApiError;

use super::super::DogechainApi;
use super::connection::{parse_base_url, resolve_url};

/// Dogechain explorer client over HTTP(S).
///
/// Holds no per-call state, so one instance can serve concurrent calls from
/// many tasks (wrap it in an `Arc` to share it).
pub struct HttpApiClient {
    client: reqwest::Client,
    base: Url,
    encode_segments: bool,
}

impl HttpApiClient {
    /// Create a client for the host and path in `config`.
    ///
    /// Fails if the host is not an HTTP(S) URL or the transport cannot be
    /// built. No request is sent.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let base = parse_base_url(&config.host, &config.api_path)?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base,
            encode_segments: config.encode_segments,
        })
    }

    /// `host + api_path`, always ending in `/`.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// The exact URL a call for `endpoint` would request.
    pub fn request_url(&self, endpoint: &Endpoint) -> Result<Url, ApiError> {
        resolve_url(&self.base, endpoint, self.encode_segments)
    }

    /// GET `endpoint` and return the body unmodified.
    pub async fn fetch_text(&self, endpoint: &Endpoint) -> Result<String, ApiError> {
        let url = self.request_url(endpoint)?;
        debug!(api.endpoint = endpoint.name(), %url, "api request");

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "*/*")
            .send()
            .await?;
        let status = response.status();

        let body = response.text().await?;
        debug!(api.endpoint = endpoint.name(), %status, body_len = body.len(), "api response");
        trace!(api.endpoint = endpoint.name(), body = %body, "api response body");

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    /// GET `endpoint` and decode the body as JSON.
    pub async fn fetch_json(&self, endpoint: &Endpoint) -> Result<serde_json::Value, ApiError> {
        let body = self.fetch_text(endpoint).await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode {
            message: e.to_string(),
            body,
        })
    }
}

#[async_trait]
impl DogechainApi for HttpApiClient {
    async fn get_transactions(&self) -> Result<serde_json::Value, ApiError> {
        self.fetch_json(&Endpoint::transactions()).await
    }

    async fn get_address_balance(&self, address: &str) -> Result<String, ApiError> {
        self.fetch_text(&Endpoint::address_balance(address)).await
    }

    async fn address_to_hash(&self, address: &str) -> Result<String, ApiError> {
        self.fetch_text(&Endpoint::address_to_hash(address)).await
    }

    async fn check_address(&self, address: &str) -> Result<String, ApiError> {
        self.fetch_text(&Endpoint::check_address(address)).await
    }

    async fn decode_address(&self, address: &str) -> Result<String, ApiError> {
        self.fetch_text(&Endpoint::decode_address(address)).await
    }

    async fn get_block_count(&self) -> Result<String, ApiError> {
        self.fetch_text(&Endpoint::block_count()).await
    }

    async fn get_difficulty(&self) -> Result<String, ApiError> {
        self.fetch_text(&Endpoint::difficulty()).await
    }

    async fn get_received_by_address(&self, address: &str) -> Result<String, ApiError> {
        self.fetch_text(&Endpoint::received_by_address(address)).await
    }

    async fn get_sent_by_address(&self, address: &str) -> Result<String, ApiError> {
        self.fetch_text(&Endpoint::sent_by_address(address)).await
    }

    async fn get_total_supply(&self) -> Result<String, ApiError> {
        self.fetch_text(&Endpoint::total_supply()).await
    }

    async fn hash_to_address(&self, hash: &str) -> Result<String, ApiError> {
        self.fetch_text(&Endpoint::hash_to_address(hash)).await
    }

    async fn get_net_hash(&self, query: NetHashQuery) -> Result<serde_json::Value, ApiError> {
        self.fetch_json(&Endpoint::net_hash(query)).await
    }
}
