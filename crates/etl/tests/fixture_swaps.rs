use config::Config;
use std::path::PathBuf;
use std::time::Duration;
use types::StopReason;

fn fixture_config() -> Config {
    Config {
        pool_address: "8phK65jxmTPEN158xLgSr4oZvssw9SyTErpNZj3g7px4".to_string(),
        pacing_delay: Duration::ZERO,
        retry_delay: Duration::ZERO,
        fixture_path: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/mock_data.json"),
        ..Default::default()
    }
}

#[tokio::test]
async fn fixture_produces_paired_swaps() {
    let swaps = etl::get_swaps(fixture_config(), "2024-07-01", "2024-07-02", true)
        .await
        .unwrap();

    assert_eq!(swaps.len(), 2);

    let abc = &swaps[0];
    assert_eq!(abc.trans_id, "abc");
    assert_eq!(abc.amount_in, 1.0);
    assert_eq!(abc.amount_out, 0.5);
    assert_eq!(abc.owner_address, "5Q544fKrFoe6tsEbD7S8EmxGTJYAKtTVhAW5Q5pge4j1");
    assert_eq!(abc.token_in_address, "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v");
    assert_eq!(abc.token_out_address, "So11111111111111111111111111111111111111112");
    assert_eq!(abc.timestamp, 1_719_870_000);
    assert_eq!(abc.datetime.to_string(), "2024-07-01 21:40:00");

    let sol_to_usdc = &swaps[1];
    assert_eq!(sol_to_usdc.amount_in, 2.5);
    assert_eq!(sol_to_usdc.amount_out, 354.12);

    // the lone inbound leg has no counterpart
    assert!(swaps
        .iter()
        .all(|swap| swap.trans_id != "2ZE7Rz5Hp4cEJsWoHnPm5cr3KsXwcZ8qW3RkUqsvS9j1"));
}

#[tokio::test]
async fn fixture_is_read_once_when_no_next_page_is_reported() {
    let transport = provider::connect(&fixture_config(), true).unwrap();
    let worker = etl::SwapWorker::new(fixture_config(), transport).unwrap();

    let report = worker.get_transfers("2024-07-01", "2024-07-02").await.unwrap();
    assert_eq!(report.stop, StopReason::NoNextPage);
    assert_eq!(report.pages, 1);
    assert_eq!(report.transfers.len(), 5);
    assert_eq!(report.watermark, Some(1_719_870_000));
}

#[tokio::test]
async fn missing_fixture_is_an_error() {
    let mut config = fixture_config();
    config.fixture_path = PathBuf::from("does/not/exist.json");
    let err = etl::get_swaps(config, "2024-07-01", "2024-07-02", true)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        etl::ETLError::Provider(provider::ProviderError::Fixture { .. })
    ));
}
