use std::sync::Arc;

use tickwatch_core::{CannedHttpClient, HttpError, HttpResponse, ProviderErrorKind};
use tickwatch_tests::{canned_client, movers_body, symbol, AlphaVantageClient, ProviderConfig};

#[tokio::test]
async fn missing_api_key_is_a_typed_error_not_a_request() {
    let canned = Arc::new(CannedHttpClient::new());
    let client = AlphaVantageClient::with_http_client(ProviderConfig::default(), canned.clone());

    let err = client.movers().await.expect_err("not configured");
    assert_eq!(err.kind(), ProviderErrorKind::NotConfigured);
    assert!(!err.retryable());

    // No request may leave the process without a credential.
    assert!(canned.recorded_requests().is_empty());
}

#[tokio::test]
async fn api_key_is_sent_but_never_part_of_an_error_message() {
    let canned = Arc::new(CannedHttpClient::with_response(Ok(
        HttpResponse::with_status(500, String::new()),
    )));
    let client = canned_client(canned.clone());

    let err = client.movers().await.expect_err("http error");
    assert_eq!(err.kind(), ProviderErrorKind::Http);
    assert!(!err.message().contains("test-key"));
    assert!(canned.recorded_requests()[0].url.contains("apikey=test-key"));
}

#[tokio::test]
async fn transport_failures_are_retryable_http_errors() {
    let canned = Arc::new(CannedHttpClient::with_response(Err(HttpError::new(
        "connection failed: connection refused",
    ))));
    let client = canned_client(canned);

    let err = client.movers().await.expect_err("transport error");
    assert_eq!(err.kind(), ProviderErrorKind::Http);
    assert!(err.retryable());
    assert!(err.message().contains("connection refused"));
}

#[tokio::test]
async fn in_band_error_message_beats_the_typed_parse() {
    // A 200 body carrying "Error Message" must never parse as data.
    let canned = Arc::new(CannedHttpClient::with_response(Ok(HttpResponse::ok_json(
        r#"{"Error Message": "Invalid API call. Please retry or visit the documentation."}"#,
    ))));
    let client = canned_client(canned);

    let err = client.movers().await.expect_err("provider message");
    assert_eq!(err.kind(), ProviderErrorKind::ProviderMessage);
    assert!(!err.retryable());
}

#[tokio::test]
async fn rate_limit_note_is_retryable() {
    let canned = Arc::new(CannedHttpClient::with_response(Ok(HttpResponse::ok_json(
        r#"{"Note": "Thank you for using Alpha Vantage!"}"#,
    ))));
    let client = canned_client(canned);

    let err = client
        .overview(&symbol("AAPL"))
        .await
        .expect_err("rate limited");
    assert_eq!(err.kind(), ProviderErrorKind::ProviderMessage);
    assert!(err.retryable());
}

#[tokio::test]
async fn movers_board_round_trips_all_sections() {
    let canned = Arc::new(CannedHttpClient::with_response(Ok(HttpResponse::ok_json(
        movers_body(),
    ))));
    let client = canned_client(canned.clone());

    let board = client.movers().await.expect("board fetched");
    assert_eq!(board.top_gainers.len(), 1);
    assert_eq!(board.top_losers.len(), 1);
    assert!(board.most_actively_traded.is_empty());
    assert_eq!(board.top_gainers[0].name, "Apple Inc.");

    let url = &canned.recorded_requests()[0].url;
    assert!(url.contains("function=TOP_GAINERS_LOSERS"));
}

#[tokio::test]
async fn movers_with_no_sections_is_malformed() {
    let canned = Arc::new(CannedHttpClient::with_response(Ok(HttpResponse::ok_json(
        "{}",
    ))));
    let client = canned_client(canned);

    let err = client.movers().await.expect_err("malformed");
    assert_eq!(err.kind(), ProviderErrorKind::MalformedResponse);
}

#[tokio::test]
async fn overview_carries_optional_fundamentals() {
    let body = r#"{
        "Symbol": "AAPL",
        "Name": "Apple Inc.",
        "Sector": "Technology",
        "MarketCapitalization": "2500000000000",
        "52WeekLow": "120.50",
        "52WeekHigh": "199.00"
    }"#;
    let canned = Arc::new(CannedHttpClient::with_response(Ok(HttpResponse::ok_json(
        body,
    ))));
    let client = canned_client(canned);

    let overview = client
        .overview(&symbol("AAPL"))
        .await
        .expect("overview fetched");
    assert_eq!(overview.name, "Apple Inc.");
    assert_eq!(overview.sector.as_deref(), Some("Technology"));
    assert!(overview.pe_ratio.is_none());
    assert_eq!(overview.market_cap_display(), "$2.50T");
}

#[tokio::test]
async fn symbols_are_url_encoded_in_requests() {
    let canned = Arc::new(CannedHttpClient::with_response(Ok(HttpResponse::ok_json(
        r#"{"Symbol": "BRK.B", "Name": "Berkshire Hathaway"}"#,
    ))));
    let client = canned_client(canned.clone());

    client
        .overview(&symbol("BRK.B"))
        .await
        .expect("overview fetched");

    let url = &canned.recorded_requests()[0].url;
    assert!(url.contains("symbol=BRK.B"));
}
