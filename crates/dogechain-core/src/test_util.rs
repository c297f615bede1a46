//! Shared fixtures for `dogechain-core` unit tests.
//!
//! Bodies are shaped like the explorer's real responses so the parsers and
//! the mock backend are exercised against the same data.

pub const ADDRESS: &str = "D72cQfgoY5ToQqGwziLCtE984PvJ7RdXns";

/// Three rows of `nethash/500/0/?format=json`, first, middle, and latest.
pub const NET_HASH_BODY: &str = include_str!("../tests/fixtures/nethash.json");

/// Recent-block transaction counts as `transactions` returns them.
pub const TRANSACTIONS_BODY: &str = include_str!("../tests/fixtures/transactions.json");
