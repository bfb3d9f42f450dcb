//! # Tickwatch Core
//!
//! Domain types and session state for a stock-watching toolkit.
//!
//! ## Overview
//!
//! This crate provides the foundational components for Tickwatch:
//!
//! - **Canonical domain models** for stocks, watchlists, movers, and
//!   chart points
//! - **Watchlist store**: the in-memory, observer-subscribed single
//!   source of truth for a session's watchlists
//! - **Series transformer**: raw provider time series in, bounded
//!   display-ready point sequences and change summaries out
//! - **Quote client** for the market-data provider's HTTP endpoints
//! - **HTTP transport trait** so everything runs offline under test
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Environment-supplied provider configuration |
//! | [`domain`] | Domain models (Stock, Watchlist, Window, ChartPoint) |
//! | [`envelope`] | Response envelope with metadata |
//! | [`error`] | Core error types |
//! | [`http_client`] | HTTP client abstraction |
//! | [`provider`] | Quote-provider boundary adapter |
//! | [`series`] | Series transformer |
//! | [`store`] | In-memory watchlist store |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tickwatch_core::{AlphaVantageClient, ProviderConfig, Symbol, Window};
//! use tickwatch_core::series::build_chart;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AlphaVantageClient::new(ProviderConfig::from_env());
//!     let symbol = Symbol::parse("AAPL")?;
//!
//!     let payload = client.time_series(&symbol, Window::OneDay).await?;
//!     let chart = build_chart(&payload, Window::OneDay)?;
//!     println!("change: {:+.2}", chart.summary.change);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Store operations never fail for not-found ids; absence is a silent
//! no-op. The client and transformer surface typed errors
//! ([`ProviderError`], [`SeriesError`]) that callers translate into
//! visible error states. API keys are read from environment variables
//! only and never logged.

pub mod config;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod http_client;
pub mod provider;
pub mod series;
pub mod store;

// Re-export commonly used types at crate root for convenience

pub use config::ProviderConfig;
pub use domain::{
    format_market_cap, format_price, ChartPoint, CompanyOverview, Mover, MoversBoard,
    SeriesFunction, Stock, Symbol, UtcDateTime, Watchlist, WatchlistId, Window,
};
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta};
pub use error::{CoreError, SeriesError, ValidationError};
pub use http_client::{
    CannedHttpClient, HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient,
};
pub use provider::{AlphaVantageClient, ProviderError, ProviderErrorKind, SeriesEntry, SeriesPayload};
pub use series::{build_chart, ChangeSummary, ChartSeries, MAX_POINTS};
pub use store::{SubscriptionId, WatchlistStore};
