//! Client configuration.
//!
//! Replaces fixed host/path constants with a value handed to
//! [`HttpApiClient::new`](crate::api::HttpApiClient::new), so tests can point
//! the client at a local mock server.

use std::time::Duration;

pub const DEFAULT_HOST: &str = "https://dogechain.info/";
pub const DEFAULT_API_PATH: &str = "chain/Dogecoin/q/";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Scheme and authority of the explorer, e.g. `https://dogechain.info/`.
    pub host: String,
    /// Prefix placed between the host and every endpoint template.
    pub api_path: String,
    /// Whole-request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    /// Percent-encode caller-supplied path segments (addresses, hashes).
    /// Off by default: the explorer has always received them verbatim.
    pub encode_segments: bool,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            api_path: DEFAULT_API_PATH.to_owned(),
            timeout: None,
            connect_timeout: None,
            encode_segments: false,
            user_agent: concat!("dogechain-core/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl ApiConfig {
    /// Default configuration pointed at another host, keeping the API path.
    pub fn with_host(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }
}
