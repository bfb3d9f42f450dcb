use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Upper bound on ticker length after trimming; long enough for
/// exchange-suffixed tickers like `BRK.B` without admitting free text.
pub const SYMBOL_MAX_LEN: usize = 15;

/// Canonical uppercase ticker. Within a watchlist the symbol is the
/// membership key: adds are idempotent on it and removes target it, so
/// two entries in one list never share a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Normalize a raw ticker (trim, uppercase) and validate it: ASCII
    /// letter first, then letters, digits, `.` or `-`.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let candidate = input.trim().to_ascii_uppercase();
        if candidate.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }

        let len = candidate.chars().count();
        if len > SYMBOL_MAX_LEN {
            return Err(ValidationError::SymbolTooLong {
                len,
                max: SYMBOL_MAX_LEN,
            });
        }

        for (index, ch) in candidate.chars().enumerate() {
            match ch {
                'A'..='Z' => {}
                _ if index == 0 => return Err(ValidationError::SymbolInvalidStart { ch }),
                '0'..='9' | '.' | '-' => {}
                _ => return Err(ValidationError::SymbolInvalidChar { ch, index }),
            }
        }

        Ok(Self(candidate))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Symbol {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_and_padding_normalize_to_canonical_form() {
        let parsed = Symbol::parse("  nvda\t").expect("ticker parses");
        assert_eq!(parsed.as_str(), "NVDA");
        assert_eq!(parsed, Symbol::parse("NVDA").expect("ticker parses"));
    }

    #[test]
    fn share_class_and_hyphenated_tickers_are_accepted() {
        assert_eq!(
            Symbol::parse("brk.b").expect("ticker parses").as_str(),
            "BRK.B"
        );
        assert!(Symbol::parse("RDS-A").is_ok());
    }

    #[test]
    fn whitespace_only_input_is_empty() {
        let err = Symbol::parse(" \t ").expect_err("must fail");
        assert!(matches!(err, ValidationError::EmptySymbol));
    }

    #[test]
    fn first_character_must_be_a_letter() {
        let err = Symbol::parse("3M-").expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::SymbolInvalidStart { ch: '3' }
        ));
        assert!(Symbol::parse("MMM").is_ok());
    }

    #[test]
    fn invalid_character_is_reported_with_its_position() {
        let err = Symbol::parse("AA PL").expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::SymbolInvalidChar { ch: ' ', index: 2 }
        ));
    }

    #[test]
    fn overlong_tickers_are_rejected_with_both_lengths() {
        let err = Symbol::parse("ABCDEFGHIJKLMNOP").expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::SymbolTooLong { len: 16, max: SYMBOL_MAX_LEN }
        ));
    }

    #[test]
    fn deserialization_goes_through_validation() {
        let parsed: Symbol = serde_json::from_str("\"aapl\"").expect("valid ticker");
        assert_eq!(parsed.as_str(), "AAPL");

        let err = serde_json::from_str::<Symbol>("\"AA$PL\"").expect_err("must fail");
        assert!(err.to_string().contains("invalid character"));
    }
}
