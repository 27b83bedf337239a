use config::Config;
use mockito::Matcher;
use std::time::Duration;
use types::StopReason;

fn live_config(base_url: String) -> Config {
    Config {
        api_key: "expired".to_string(),
        base_url,
        pool_address: "8phK65jxmTPEN158xLgSr4oZvssw9SyTErpNZj3g7px4".to_string(),
        pacing_delay: Duration::ZERO,
        retry_delay: Duration::ZERO,
        ..Default::default()
    }
}

#[tokio::test]
async fn unauthorized_response_ends_fetch_without_rows() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/account/transfer")
        .match_header("token", "expired")
        .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
        .with_status(401)
        .with_body(r#"{"success":false,"errors":{"code":1100,"message":"Unauthorized"}}"#)
        .expect(1)
        .create_async()
        .await;

    let config = live_config(server.url());
    let transport = provider::connect(&config, false).unwrap();
    let worker = etl::SwapWorker::new(config, transport).unwrap();

    let report = worker.get_transfers("2024-07-01", "2024-07-02").await.unwrap();
    assert_eq!(report.stop, StopReason::EmptyPage);
    assert!(report.transfers.is_empty());
    assert_eq!(report.pages, 1);
    mock.assert_async().await;
}

#[tokio::test]
async fn unauthorized_response_yields_empty_swap_table() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/account/transfer")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"success":false,"errors":{"code":1100,"message":"Unauthorized"}}"#)
        .create_async()
        .await;

    let swaps = etl::get_swaps(live_config(server.url()), "2024-07-01", "2024-07-02", false)
        .await
        .unwrap();
    assert!(swaps.is_empty());
}
