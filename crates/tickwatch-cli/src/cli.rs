//! CLI argument definitions for Tickwatch.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `movers` | Fetch the top gainers/losers/most-active board |
//! | `overview` | Fetch a company descriptor |
//! | `logo` | Fetch a company logo URL |
//! | `chart` | Fetch and window a price series |
//! | `watch` | Interactive watchlist session |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--timeout-ms` | `5000` | Request timeout in ms |
//!
//! # Examples
//!
//! ```bash
//! # Today's board, filtered
//! tickwatch movers --filter apple
//!
//! # One week of AAPL closes with the change summary
//! tickwatch chart AAPL --window 1W --pretty
//!
//! # Manage watchlists for the session
//! tickwatch watch
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Tickwatch - market movers, charts, and session watchlists
///
/// Fetches top gainers/losers and per-symbol overview/chart data from
/// the configured market-data provider, and manages in-memory
/// watchlists for the duration of a session.
#[derive(Debug, Parser)]
#[command(
    name = "tickwatch",
    author,
    version,
    about = "Market movers, charts, and session watchlists"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 5000)]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// ASCII table format for terminal display.
    Table,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the top gainers, top losers, and most actively traded
    /// board.
    ///
    /// # Examples
    ///
    ///   tickwatch movers
    ///   tickwatch movers --filter nvidia
    Movers(MoversArgs),

    /// Fetch the company descriptor for a symbol.
    ///
    /// # Examples
    ///
    ///   tickwatch overview AAPL
    Overview(OverviewArgs),

    /// Fetch the logo URL for a symbol.
    ///
    /// # Examples
    ///
    ///   tickwatch logo AAPL
    Logo(LogoArgs),

    /// Fetch a windowed price series and its change summary.
    ///
    /// # Examples
    ///
    ///   tickwatch chart AAPL
    ///   tickwatch chart AAPL --window 6M --pretty
    Chart(ChartArgs),

    /// Start an interactive watchlist session.
    ///
    /// Watchlists live in memory for the lifetime of the session;
    /// there is no persistence across runs.
    ///
    /// # Examples
    ///
    ///   tickwatch watch
    Watch(WatchArgs),
}

/// Arguments for the `movers` command.
#[derive(Debug, Args)]
pub struct MoversArgs {
    /// Case-insensitive filter over gainers and losers by ticker or
    /// company name.
    #[arg(long)]
    pub filter: Option<String>,
}

/// Arguments for the `overview` command.
#[derive(Debug, Args)]
pub struct OverviewArgs {
    /// Market symbol (e.g., AAPL).
    pub symbol: String,
}

/// Arguments for the `logo` command.
#[derive(Debug, Args)]
pub struct LogoArgs {
    /// Market symbol (e.g., AAPL).
    pub symbol: String,
}

/// Arguments for the `chart` command.
#[derive(Debug, Args)]
pub struct ChartArgs {
    /// Market symbol (e.g., AAPL).
    pub symbol: String,

    /// Display window.
    ///
    /// One of: 1D, 1W, 1M, 3M, 6M, 1Y.
    #[arg(long, default_value = "1D")]
    pub window: String,
}

/// Arguments for the `watch` command.
#[derive(Debug, Args)]
pub struct WatchArgs {}
