//! Endpoint templates for the explorer's `q/` query interface.
//!
//! An [`Endpoint`] is the path suffix appended to `host + api_path`, kept as
//! a list of segments so the HTTP adapter can either join them verbatim or
//! percent-encode each one as a single path segment.

use std::fmt;

/// Number of blocks per `nethash` row when the caller does not choose one.
pub const DEFAULT_NET_HASH_INTERVAL: u64 = 144;

// ==============================================================================
// Net Hash Query
// ==============================================================================

/// Parameters of the `nethash` endpoint.
///
/// `stop = None` leaves the upper bound to the server (latest block). A zero
/// stop means the same thing and is not sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetHashQuery {
    pub interval: u64,
    pub start: u64,
    pub stop: Option<u64>,
}

impl Default for NetHashQuery {
    fn default() -> Self {
        Self {
            interval: DEFAULT_NET_HASH_INTERVAL,
            start: 0,
            stop: None,
        }
    }
}

// ==============================================================================
// Endpoint
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    segments: Vec<String>,
    query: Option<&'static str>,
}

impl Endpoint {
    fn fixed(name: &str) -> Self {
        Self {
            segments: vec![name.to_owned()],
            query: None,
        }
    }

    fn with_arg(name: &str, arg: &str) -> Self {
        Self {
            segments: vec![name.to_owned(), arg.to_owned()],
            query: None,
        }
    }

    pub fn transactions() -> Self {
        Self::fixed("transactions")
    }

    pub fn address_balance(address: &str) -> Self {
        Self::with_arg("addressbalance", address)
    }

    pub fn address_to_hash(address: &str) -> Self {
        Self::with_arg("addresstohash", address)
    }

    pub fn check_address(address: &str) -> Self {
        Self::with_arg("checkaddress", address)
    }

    pub fn decode_address(address: &str) -> Self {
        Self::with_arg("decode_address", address)
    }

    pub fn block_count() -> Self {
        Self::fixed("getblockcount")
    }

    pub fn difficulty() -> Self {
        Self::fixed("getdifficulty")
    }

    pub fn received_by_address(address: &str) -> Self {
        Self::with_arg("getreceivedbyaddress", address)
    }

    pub fn sent_by_address(address: &str) -> Self {
        Self::with_arg("getsentbyaddress", address)
    }

    pub fn total_supply() -> Self {
        Self::fixed("totalbc")
    }

    pub fn hash_to_address(hash: &str) -> Self {
        Self::with_arg("hashtoaddress", hash)
    }

    /// `nethash/{interval}/{start}/` or `nethash/{interval}/{start}//{stop}`.
    ///
    /// The trailing empty segment is what the explorer has always been sent;
    /// with a stop bound it turns into a double slash. Both forms are kept
    /// as-is for wire compatibility. A stop of `0` is omitted like `None`.
    pub fn net_hash(query: NetHashQuery) -> Self {
        let mut segments = vec![
            "nethash".to_owned(),
            query.interval.to_string(),
            query.start.to_string(),
            String::new(),
        ];
        if let Some(stop) = query.stop.filter(|stop| *stop != 0) {
            segments.push(stop.to_string());
        }
        Self {
            segments,
            query: Some("format=json"),
        }
    }

    /// Remote operation name, i.e. the first path segment.
    pub fn name(&self) -> &str {
        self.segments.first().map(String::as_str).unwrap_or_default()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn query(&self) -> Option<&'static str> {
        self.query
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))?;
        if let Some(query) = self.query {
            write!(f, "?{query}")?;
        }
        Ok(())
    }
}
