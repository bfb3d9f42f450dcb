use std::sync::Arc;

use tickwatch_tests::{build_chart, canned_client, intraday_body, symbol, Window};
use tickwatch_core::{CannedHttpClient, HttpResponse, SeriesError};

#[tokio::test]
async fn fetched_series_becomes_an_ordered_bounded_chart() {
    let canned = Arc::new(CannedHttpClient::with_response(Ok(HttpResponse::ok_json(
        intraday_body(),
    ))));
    let client = canned_client(canned.clone());

    let payload = client
        .time_series(&symbol("AAPL"), Window::OneDay)
        .await
        .expect("series fetched");
    let chart = build_chart(&payload, Window::OneDay).expect("chart built");

    assert_eq!(chart.points.len(), 2);
    assert_eq!(chart.points[0].date, "2025-01-14 15:55:00");
    assert_eq!(chart.points[1].value, 151.25);
    assert!((chart.summary.change - 1.75).abs() < 1e-9);

    let url = &canned.recorded_requests()[0].url;
    assert!(url.contains("function=TIME_SERIES_INTRADAY"));
    assert!(url.contains("interval=5min"));
}

#[tokio::test]
async fn weekly_windows_use_the_weekly_series_function() {
    let body = r#"{
        "Weekly Time Series": {
            "2025-01-03": {"4. close": "100.00"},
            "2025-01-10": {"4. close": "105.00"},
            "2025-01-17": {"4. close": "110.25"}
        }
    }"#;
    let canned = Arc::new(CannedHttpClient::with_response(Ok(HttpResponse::ok_json(
        body,
    ))));
    let client = canned_client(canned.clone());

    let payload = client
        .time_series(&symbol("AAPL"), Window::SixMonths)
        .await
        .expect("series fetched");
    let chart = build_chart(&payload, Window::SixMonths).expect("chart built");

    assert_eq!(chart.points.len(), 3);
    assert!((chart.summary.percentage - 10.25).abs() < 1e-9);

    let url = &canned.recorded_requests()[0].url;
    assert!(url.contains("function=TIME_SERIES_WEEKLY"));
    assert!(!url.contains("interval="));
}

#[tokio::test]
async fn missing_series_section_surfaces_as_no_data() {
    let canned = Arc::new(CannedHttpClient::with_response(Ok(HttpResponse::ok_json(
        r#"{"Meta Data": {"2. Symbol": "AAPL"}}"#,
    ))));
    let client = canned_client(canned);

    let payload = client
        .time_series(&symbol("AAPL"), Window::OneWeek)
        .await
        .expect("payload parsed");
    assert!(payload.entries.is_empty());

    let err = build_chart(&payload, Window::OneWeek).expect_err("no chart");
    assert_eq!(err, SeriesError::NoData);
}

#[tokio::test]
async fn partially_bad_series_entries_are_dropped() {
    let body = r#"{
        "Time Series (Daily)": {
            "2025-01-13": {"4. close": "100.00"},
            "2025-01-14": {"4. close": "not-a-number"},
            "2025-01-15": {"4. close": "104.00"}
        }
    }"#;
    let canned = Arc::new(CannedHttpClient::with_response(Ok(HttpResponse::ok_json(
        body,
    ))));
    let client = canned_client(canned);

    let payload = client
        .time_series(&symbol("AAPL"), Window::OneWeek)
        .await
        .expect("series fetched");
    let chart = build_chart(&payload, Window::OneWeek).expect("chart built");

    assert_eq!(chart.points.len(), 2);
    assert!((chart.summary.change - 4.0).abs() < 1e-9);
}
