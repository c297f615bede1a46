//! Typed interpretations of explorer response bodies.
//!
//! The client operations return bodies untouched; these types are opt-in
//! views for callers that want structure. Remote verdicts such as `CK` or
//! `INVALID(...)` are values here, never errors.

use std::fmt;

use serde::Serialize;

use crate::error::ApiError;

// ==============================================================================
// Numeric Bodies
// ==============================================================================

/// Parse a `getblockcount` body.
pub fn parse_block_count(body: &str) -> Result<u64, ApiError> {
    let trimmed = body.trim();
    trimmed
        .parse()
        .map_err(|e| ApiError::InvalidResponse(format!("invalid block count `{trimmed}`: {e}")))
}

/// Parse a decimal body such as a balance, difficulty, or total supply.
pub fn parse_decimal(body: &str) -> Result<f64, ApiError> {
    let trimmed = body.trim();
    trimmed
        .parse()
        .map_err(|e| ApiError::InvalidResponse(format!("invalid decimal `{trimmed}`: {e}")))
}

// ==============================================================================
// Net Hash Rows
// ==============================================================================

/// One row of the `nethash` table.
///
/// The explorer sends each row as an 8-element array; the column order
/// matches the field order here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetHashSample {
    /// Height of the last block in the interval, plus one.
    pub block_number: u64,
    /// Block time, seconds since the Unix epoch.
    pub time: u64,
    pub target: f64,
    /// Harmonic mean of the target over the interval.
    pub avg_target_since_last: f64,
    pub difficulty: f64,
    /// Expected hashes needed to solve a block at this difficulty.
    pub hashes_to_win: f64,
    /// Interval seconds divided by blocks.
    pub avg_interval_since_last: f64,
    pub net_hash_per_second: f64,
}

const NET_HASH_COLUMNS: usize = 8;

impl NetHashSample {
    pub fn from_row(row: &serde_json::Value) -> Result<Self, ApiError> {
        let cols = row
            .as_array()
            .ok_or_else(|| ApiError::InvalidResponse(format!("nethash row is not an array: {row}")))?;
        if cols.len() < NET_HASH_COLUMNS {
            return Err(ApiError::InvalidResponse(format!(
                "nethash row has {} columns, expected {NET_HASH_COLUMNS}",
                cols.len()
            )));
        }

        Ok(Self {
            block_number: column_u64(cols, 0, "blockNumber")?,
            time: column_u64(cols, 1, "time")?,
            target: column_f64(cols, 2, "target")?,
            avg_target_since_last: column_f64(cols, 3, "avgTargetSinceLast")?,
            difficulty: column_f64(cols, 4, "difficulty")?,
            hashes_to_win: column_f64(cols, 5, "hashesToWin")?,
            avg_interval_since_last: column_f64(cols, 6, "avgIntervalSinceLast")?,
            net_hash_per_second: column_f64(cols, 7, "netHashPerSecond")?,
        })
    }

    /// Decode a whole `nethash?format=json` document (an array of rows).
    pub fn from_table(table: &serde_json::Value) -> Result<Vec<Self>, ApiError> {
        table
            .as_array()
            .ok_or_else(|| ApiError::InvalidResponse("nethash body is not an array".to_owned()))?
            .iter()
            .map(Self::from_row)
            .collect()
    }
}

fn column_f64(cols: &[serde_json::Value], idx: usize, field: &str) -> Result<f64, ApiError> {
    let value = &cols[idx];
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        // Very large targets sometimes arrive as strings.
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| ApiError::InvalidResponse(format!("invalid {field}: {value}")))
}

fn column_u64(cols: &[serde_json::Value], idx: usize, field: &str) -> Result<u64, ApiError> {
    if let Some(n) = cols[idx].as_u64() {
        return Ok(n);
    }
    let n = column_f64(cols, idx, field)?;
    if n < 0.0 || n.fract() != 0.0 || n > u64::MAX as f64 {
        return Err(ApiError::InvalidResponse(format!("{field} out of range: {n}")));
    }
    Ok(n as u64)
}

// ==============================================================================
// Address Verdicts
// ==============================================================================

/// What `checkaddress` said about an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AddressCheck {
    /// Valid address; carries the version byte as the explorer printed it.
    Valid { version: String },
    /// `X5`: the address contains characters outside the base58 alphabet.
    NotBase58,
    /// `SZ`: the decoded address has the wrong length.
    WrongSize,
    /// `CK`: the checksum does not match.
    BadChecksum,
    Other { body: String },
}

impl AddressCheck {
    pub fn parse(body: &str) -> Self {
        let code = body.trim();
        match code {
            "X5" => Self::NotBase58,
            "SZ" => Self::WrongSize,
            "CK" => Self::BadChecksum,
            _ if code.len() == 2 && code.chars().all(|c| c.is_ascii_hexdigit()) => Self::Valid {
                version: code.to_owned(),
            },
            _ => Self::Other {
                body: code.to_owned(),
            },
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}

/// A `decode_address` body: `version:hash`, or `INVALID(version:hash)` when
/// the checksum fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedAddress {
    pub version: String,
    pub hash: String,
    pub valid: bool,
}

impl DecodedAddress {
    pub fn parse(body: &str) -> Result<Self, ApiError> {
        let trimmed = body.trim();
        let (inner, valid) = match trimmed
            .strip_prefix("INVALID(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            Some(inner) => (inner, false),
            None => (trimmed, true),
        };

        let (version, hash) = inner.split_once(':').ok_or_else(|| {
            ApiError::InvalidResponse(format!("decode_address body `{trimmed}` is not version:hash"))
        })?;
        if version.is_empty() || hash.is_empty() {
            return Err(ApiError::InvalidResponse(format!(
                "decode_address body `{trimmed}` has an empty part"
            )));
        }

        Ok(Self {
            version: version.to_owned(),
            hash: hash.to_owned(),
            valid,
        })
    }
}

impl fmt::Display for DecodedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            write!(f, "{}:{}", self.version, self.hash)
        } else {
            write!(f, "INVALID({}:{})", self.version, self.hash)
        }
    }
}

// ==============================================================================
// Composed Lookups
// ==============================================================================

/// Per-address figures gathered by [`crate::lookup::address_summary`].
/// Amounts stay as the explorer formatted them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressSummary {
    pub address: String,
    pub check: AddressCheck,
    pub balance: String,
    pub received: String,
    pub sent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkStats {
    pub block_count: u64,
    pub difficulty: f64,
    pub total_supply: String,
}
