use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Symbol, UtcDateTime, ValidationError};

/// Watchlist member. Immutable once added; a re-add replaces the entry
/// wholesale rather than merging fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub symbol: Symbol,
    /// Display ticker, usually identical to `symbol`.
    pub name: String,
    pub company_name: String,
    /// Display-formatted price, e.g. `$150.00`.
    pub price: String,
    pub low: f64,
    pub high: f64,
}

impl Stock {
    pub fn new(
        symbol: Symbol,
        name: impl Into<String>,
        company_name: impl Into<String>,
        price: impl Into<String>,
        low: f64,
        high: f64,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("low", low)?;
        validate_non_negative("high", high)?;

        Ok(Self {
            symbol,
            name: name.into(),
            company_name: company_name.into(),
            price: price.into(),
            low,
            high,
        })
    }
}

/// Opaque watchlist identifier, unique among currently-held watchlists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WatchlistId(Uuid);

impl WatchlistId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for WatchlistId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// User-named, ordered collection of unique stock entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Watchlist {
    pub id: WatchlistId,
    pub name: String,
    pub stocks: Vec<Stock>,
}

impl Watchlist {
    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.stocks.iter().any(|stock| &stock.symbol == symbol)
    }
}

/// Single displayable point of a price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Provider-native date string the point was keyed by.
    pub date: String,
    pub ts: UtcDateTime,
    /// Closing price.
    pub value: f64,
}

/// One row of the top gainers/losers/most-active board. Fields stay in
/// the provider's string form until display conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mover {
    pub ticker: String,
    pub price: String,
    pub change_amount: String,
    pub change_percentage: String,
    pub volume: String,
    #[serde(default)]
    pub name: String,
}

impl Mover {
    /// Convert a board row into a watchlist-ready display stock.
    /// Movers carry no 52-week bounds, so low/high default to zero.
    pub fn to_stock(&self) -> Result<Stock, ValidationError> {
        let symbol = Symbol::parse(&self.ticker)?;
        let name = symbol.as_str().to_owned();
        Stock::new(
            symbol,
            name,
            self.name.clone(),
            format!("${}", self.price),
            0.0,
            0.0,
        )
    }

    fn matches(&self, query_lower: &str) -> bool {
        self.ticker.to_ascii_lowercase().contains(query_lower)
            || self.name.to_ascii_lowercase().contains(query_lower)
    }
}

/// Full top-movers board. All three sections are required keys; a
/// payload missing one fails to deserialize, while an empty section is
/// a legitimate quiet market.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoversBoard {
    pub top_gainers: Vec<Mover>,
    pub top_losers: Vec<Mover>,
    pub most_actively_traded: Vec<Mover>,
}

impl MoversBoard {
    /// Case-insensitive filter across gainers and losers by ticker or
    /// company name. Empty queries match everything.
    pub fn filter(&self, query: &str) -> Vec<Mover> {
        let query_lower = query.trim().to_ascii_lowercase();
        self.top_gainers
            .iter()
            .chain(self.top_losers.iter())
            .filter(|mover| query_lower.is_empty() || mover.matches(&query_lower))
            .cloned()
            .collect()
    }
}

/// Company descriptor from the provider overview endpoint. Numeric
/// fields arrive as strings and stay that way until display formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyOverview {
    #[serde(rename = "Symbol")]
    pub symbol: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Exchange", default)]
    pub exchange: Option<String>,
    #[serde(rename = "Sector", default)]
    pub sector: Option<String>,
    #[serde(rename = "Industry", default)]
    pub industry: Option<String>,
    #[serde(rename = "MarketCapitalization", default)]
    pub market_capitalization: Option<String>,
    #[serde(rename = "DividendYield", default)]
    pub dividend_yield: Option<String>,
    #[serde(rename = "ProfitMargin", default)]
    pub profit_margin: Option<String>,
    #[serde(rename = "Beta", default)]
    pub beta: Option<String>,
    #[serde(rename = "PERatio", default)]
    pub pe_ratio: Option<String>,
    #[serde(rename = "52WeekLow", default)]
    pub week_52_low: Option<String>,
    #[serde(rename = "52WeekHigh", default)]
    pub week_52_high: Option<String>,
}

impl CompanyOverview {
    pub fn market_cap_display(&self) -> String {
        self.market_capitalization
            .as_deref()
            .map(format_market_cap)
            .unwrap_or_else(|| String::from("N/A"))
    }
}

/// `$`-prefixed price with two decimals.
pub fn format_price(value: f64) -> String {
    format!("${value:.2}")
}

/// Abbreviated market cap: `$1.23T`, `$45.60B`, `$789.00M`, else plain.
pub fn format_market_cap(raw: &str) -> String {
    let Ok(value) = raw.trim().parse::<f64>() else {
        return String::from("N/A");
    };

    if value >= 1e12 {
        format!("${:.2}T", value / 1e12)
    } else if value >= 1e9 {
        format!("${:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("${:.2}M", value / 1e6)
    } else {
        format!("${value:.2}")
    }
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mover(ticker: &str, name: &str) -> Mover {
        Mover {
            ticker: ticker.to_owned(),
            price: String::from("150.00"),
            change_amount: String::from("3.75"),
            change_percentage: String::from("2.5%"),
            volume: String::from("1000000"),
            name: name.to_owned(),
        }
    }

    #[test]
    fn mover_converts_to_display_stock() {
        let stock = mover("AAPL", "Apple Inc.").to_stock().expect("must convert");
        assert_eq!(stock.symbol.as_str(), "AAPL");
        assert_eq!(stock.price, "$150.00");
        assert_eq!(stock.company_name, "Apple Inc.");
    }

    #[test]
    fn board_filter_matches_ticker_and_company_name() {
        let board = MoversBoard {
            top_gainers: vec![mover("AAPL", "Apple Inc."), mover("MSFT", "Microsoft")],
            top_losers: vec![mover("NVDA", "NVIDIA Corp")],
            most_actively_traded: Vec::new(),
        };

        let by_ticker = board.filter("nvda");
        assert_eq!(by_ticker.len(), 1);
        assert_eq!(by_ticker[0].ticker, "NVDA");

        let by_name = board.filter("micro");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].ticker, "MSFT");

        assert_eq!(board.filter("").len(), 3);
    }

    #[test]
    fn formats_market_cap_abbreviations() {
        assert_eq!(format_market_cap("2500000000000"), "$2.50T");
        assert_eq!(format_market_cap("1200000000"), "$1.20B");
        assert_eq!(format_market_cap("34000000"), "$34.00M");
        assert_eq!(format_market_cap("not-a-number"), "N/A");
    }

    #[test]
    fn rejects_negative_bounds() {
        let symbol = Symbol::parse("AAPL").expect("valid symbol");
        let err = Stock::new(symbol, "AAPL", "Apple", "$1.00", -1.0, 2.0)
            .expect_err("must fail");
        assert!(matches!(err, ValidationError::NegativeValue { field: "low" }));
    }
}
