//! Quote currencies accepted on the command line.
use std::str::FromStr;

use strum_macros::{Display, EnumString};

use crate::error::TickerError;

/// Quote currency of the `BTC_*` product.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, Display, EnumString, Hash, Eq, PartialEq)]
pub enum Currency {
    USD,
    JPY,
}

impl Currency {
    /// Validates a raw argument. A missing argument counts as the empty string.
    ///
    /// The value is uppercased before matching, so any casing of `usd`/`jpy` works.
    /// Surrounding whitespace is not trimmed.
    pub fn parse_arg(raw: Option<&str>) -> Result<Self, TickerError> {
        let normalized = raw.unwrap_or_default().to_uppercase();
        Currency::from_str(&normalized).map_err(|_| TickerError::UnsupportedCurrency(normalized))
    }
}
