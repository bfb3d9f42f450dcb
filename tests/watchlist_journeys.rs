use std::sync::Arc;

use tickwatch_core::{format_price, CannedHttpClient, HttpResponse};
use tickwatch_tests::{
    build_chart, canned_client, intraday_body, movers_body, symbol, WatchlistStore, Window,
};

/// A user browses the movers board, picks the top gainer, adds it to a
/// fresh watchlist, and opens its one-day chart.
#[tokio::test]
async fn gainer_to_watchlist_to_chart() {
    let canned = Arc::new(CannedHttpClient::new());
    canned.push_response(Ok(HttpResponse::ok_json(movers_body())));
    canned.push_response(Ok(HttpResponse::ok_json(intraday_body())));
    let client = canned_client(canned.clone());

    let board = client.movers().await.expect("board fetched");
    let gainer = &board.top_gainers[0];
    assert_eq!(gainer.ticker, "AAPL");
    assert_eq!(gainer.change_percentage, "2.5%");

    let stock = gainer.to_stock().expect("display stock");
    assert_eq!(stock.symbol.as_str(), "AAPL");
    assert_eq!(stock.price, "$150.00");
    assert_eq!(stock.company_name, "Apple Inc.");

    let store = WatchlistStore::new();
    let list = store.create_watchlist("My Stocks").expect("created");
    assert!(store.add_stock(&list.id, stock));

    let payload = client
        .time_series(&symbol("AAPL"), Window::OneDay)
        .await
        .expect("series fetched");
    let chart = build_chart(&payload, Window::OneDay).expect("chart built");
    assert_eq!(chart.window, Window::OneDay);
    assert_eq!(format_price(chart.points[1].value), "$151.25");

    let urls: Vec<String> = canned
        .recorded_requests()
        .into_iter()
        .map(|r| r.url)
        .collect();
    assert!(urls[0].contains("function=TOP_GAINERS_LOSERS"));
    assert!(urls[1].contains("function=TIME_SERIES_INTRADAY"));
    assert!(urls[1].contains("symbol=AAPL"));
}

/// Filtering the board matches tickers and company names across both
/// the gainer and loser sections.
#[tokio::test]
async fn board_filter_feeds_the_watchlist() {
    let canned = Arc::new(CannedHttpClient::with_response(Ok(HttpResponse::ok_json(
        movers_body(),
    ))));
    let client = canned_client(canned);

    let board = client.movers().await.expect("board fetched");
    let matches = board.filter("apple");
    assert_eq!(matches.len(), 1);

    let store = WatchlistStore::new();
    let list = store.create_watchlist("Filtered").expect("created");
    for mover in &matches {
        let stock = mover.to_stock().expect("display stock");
        store.add_stock(&list.id, stock);
    }

    let list = store.find(&list.id).expect("exists");
    assert_eq!(list.stocks.len(), 1);
    assert_eq!(list.stocks[0].symbol.as_str(), "AAPL");
}

/// Adding the same symbol from two board sections keeps a single entry.
#[tokio::test]
async fn duplicate_board_rows_collapse_in_the_watchlist() {
    let body = r#"{
        "top_gainers": [
            {"ticker": "AAPL", "price": "150.00", "change_amount": "3.66", "change_percentage": "2.5%", "volume": "1200000", "name": "Apple Inc."}
        ],
        "top_losers": [],
        "most_actively_traded": [
            {"ticker": "AAPL", "price": "150.00", "change_amount": "3.66", "change_percentage": "2.5%", "volume": "1200000", "name": "Apple Inc."}
        ]
    }"#;
    let canned = Arc::new(CannedHttpClient::with_response(Ok(HttpResponse::ok_json(
        body,
    ))));
    let client = canned_client(canned);

    let board = client.movers().await.expect("board fetched");
    let store = WatchlistStore::new();
    let list = store.create_watchlist("All").expect("created");

    for mover in board
        .top_gainers
        .iter()
        .chain(board.most_actively_traded.iter())
    {
        store.add_stock(&list.id, mover.to_stock().expect("display stock"));
    }

    assert_eq!(store.find(&list.id).expect("exists").stocks.len(), 1);
}
