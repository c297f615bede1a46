use std::sync::Once;
use std::time::Duration;

use dogechain_core::lookup::network_stats;
use dogechain_core::types::{parse_block_count, AddressCheck};
use dogechain_core::{ApiConfig, DogechainApi, HttpApiClient, NetHashQuery};

static TRACING_INIT: Once = Once::new();

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("dogechain_core=debug")),
            )
            .with_target(true)
            .try_init();
    });
}

fn live_client() -> HttpApiClient {
    let host = std::env::var("DOGECHAIN_TEST_HOST")
        .unwrap_or_else(|_| "https://dogechain.info/".to_owned());
    HttpApiClient::new(ApiConfig {
        timeout: Some(Duration::from_secs(30)),
        ..ApiConfig::with_host(host)
    })
    .expect("live client must construct")
}

#[tokio::test(flavor = "multi_thread")]
#[ignore = "requires network access to the public explorer"]
async fn live_explorer_answers_chain_queries() {
    init_tracing();
    let api = live_client();

    let height = api.get_block_count().await.expect("getblockcount must succeed");
    let height = parse_block_count(&height).expect("block count must be numeric");
    eprintln!("[itest] explorer height {height}");
    assert!(height > 172_309, "chain height must be past the 2014 example");

    let stats = network_stats(&api).await.expect("network stats must succeed");
    assert!(stats.difficulty > 0.0);

    let check = api
        .check_address("D72cQfgoY5ToQqGwziLCtE984PvJ7RdXns")
        .await
        .expect("checkaddress must succeed");
    assert!(
        AddressCheck::parse(&check).is_valid(),
        "donation address must be valid, got {check}"
    );

    let table = api
        .get_net_hash(NetHashQuery {
            interval: 100_000,
            ..NetHashQuery::default()
        })
        .await
        .expect("nethash must succeed");
    assert!(table.is_array(), "nethash must return an array, got {table}");
}
