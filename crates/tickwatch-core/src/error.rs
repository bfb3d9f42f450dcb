use thiserror::Error;

/// Validation and contract errors exposed by `tickwatch-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter: '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("invalid window '{value}', expected one of 1D, 1W, 1M, 3M, 6M, 1Y")]
    InvalidWindow { value: String },

    #[error("timestamp is not a recognized provider format: '{value}'")]
    UnparseableTimestamp { value: String },
    #[error("timestamp must be UTC: '{value}'")]
    TimestampNotUtc { value: String },

    #[error("watchlist name cannot be empty")]
    EmptyWatchlistName,

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },

    #[error("error code cannot be empty")]
    EmptyErrorCode,
    #[error("error message cannot be empty")]
    EmptyErrorMessage,
}

/// Errors raised by the series transformer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeriesError {
    /// The provider payload carried no recognizable series key, or the
    /// series map was empty. Callers must render an explicit no-data
    /// state instead of a blank chart.
    #[error("no series data available")]
    NoData,
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
