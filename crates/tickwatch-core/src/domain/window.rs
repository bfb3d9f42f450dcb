use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Named trailing time range controlling how many series points are
/// displayed and which provider time-series endpoint serves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Window {
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "1W")]
    OneWeek,
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
}

/// Provider time-series endpoint family backing a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesFunction {
    Intraday,
    Daily,
    Weekly,
}

impl SeriesFunction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Intraday => "TIME_SERIES_INTRADAY",
            Self::Daily => "TIME_SERIES_DAILY",
            Self::Weekly => "TIME_SERIES_WEEKLY",
        }
    }

    /// JSON key holding the date map in the provider response.
    pub const fn series_key(self) -> &'static str {
        match self {
            Self::Intraday => "Time Series (5min)",
            Self::Daily => "Time Series (Daily)",
            Self::Weekly => "Weekly Time Series",
        }
    }

    /// Extra `interval` query parameter, intraday only.
    pub const fn interval(self) -> Option<&'static str> {
        match self {
            Self::Intraday => Some("5min"),
            Self::Daily | Self::Weekly => None,
        }
    }
}

impl Window {
    pub const ALL: [Self; 6] = [
        Self::OneDay,
        Self::OneWeek,
        Self::OneMonth,
        Self::ThreeMonths,
        Self::SixMonths,
        Self::OneYear,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1D",
            Self::OneWeek => "1W",
            Self::OneMonth => "1M",
            Self::ThreeMonths => "3M",
            Self::SixMonths => "6M",
            Self::OneYear => "1Y",
        }
    }

    /// Number of trailing points shown for this window, before clamping
    /// to the available point count.
    pub const fn display_count(self) -> usize {
        match self {
            Self::OneDay => 24,
            Self::OneWeek => 7,
            Self::OneMonth => 30,
            Self::ThreeMonths => 12,
            Self::SixMonths => 24,
            Self::OneYear => 52,
        }
    }

    /// Which provider series feeds this window. Intraday covers a single
    /// day, daily bars cover up to a month, weekly bars the rest.
    pub const fn series_function(self) -> SeriesFunction {
        match self {
            Self::OneDay => SeriesFunction::Intraday,
            Self::OneWeek | Self::OneMonth => SeriesFunction::Daily,
            Self::ThreeMonths | Self::SixMonths | Self::OneYear => SeriesFunction::Weekly,
        }
    }
}

impl Display for Window {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Window {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "1D" => Ok(Self::OneDay),
            "1W" => Ok(Self::OneWeek),
            "1M" => Ok(Self::OneMonth),
            "3M" => Ok(Self::ThreeMonths),
            "6M" => Ok(Self::SixMonths),
            "1Y" => Ok(Self::OneYear),
            other => Err(ValidationError::InvalidWindow {
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_window() {
        let window = Window::from_str("1d").expect("must parse");
        assert_eq!(window, Window::OneDay);
    }

    #[test]
    fn rejects_invalid_window() {
        let err = Window::from_str("2Y").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidWindow { .. }));
    }

    #[test]
    fn maps_windows_to_series_functions() {
        assert_eq!(Window::OneDay.series_function(), SeriesFunction::Intraday);
        assert_eq!(Window::OneMonth.series_function(), SeriesFunction::Daily);
        assert_eq!(Window::OneYear.series_function(), SeriesFunction::Weekly);
    }

    #[test]
    fn intraday_is_the_only_function_with_an_interval() {
        assert_eq!(SeriesFunction::Intraday.interval(), Some("5min"));
        assert_eq!(SeriesFunction::Daily.interval(), None);
        assert_eq!(SeriesFunction::Weekly.interval(), None);
    }
}
