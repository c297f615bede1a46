//! Lookups composed from several explorer calls.
//!
//! Each helper issues its independent requests concurrently and fails on the
//! first error.

use futures::try_join;
use tracing::debug;

use crate::api::DogechainApi;
use crate::error::ApiError;
use crate::types::{parse_block_count, parse_decimal, AddressCheck, AddressSummary, NetworkStats};

/// Validity verdict and balance figures for one address.
pub async fn address_summary(
    api: &dyn DogechainApi,
    address: &str,
) -> Result<AddressSummary, ApiError> {
    debug!(address, "address summary lookup");
    let (check, balance, received, sent) = try_join!(
        api.check_address(address),
        api.get_address_balance(address),
        api.get_received_by_address(address),
        api.get_sent_by_address(address),
    )?;

    Ok(AddressSummary {
        address: address.to_owned(),
        check: AddressCheck::parse(&check),
        balance: balance.trim().to_owned(),
        received: received.trim().to_owned(),
        sent: sent.trim().to_owned(),
    })
}

/// Chain height, difficulty, and total supply.
pub async fn network_stats(api: &dyn DogechainApi) -> Result<NetworkStats, ApiError> {
    debug!("network stats lookup");
    let (block_count, difficulty, total_supply) = try_join!(
        api.get_block_count(),
        api.get_difficulty(),
        api.get_total_supply(),
    )?;

    Ok(NetworkStats {
        block_count: parse_block_count(&block_count)?,
        difficulty: parse_decimal(&difficulty)?,
        total_supply: total_supply.trim().to_owned(),
    })
}
