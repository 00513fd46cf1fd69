//! The three ways a run can end, and how each one renders.
use crate::config::PROMPT;
use crate::currency::Currency;
use crate::error::TickerError;
use crate::humanize::commaf;
use crate::menu::{MenuDocument, MenuItem};

/// Terminal state of a run.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Prices were fetched and decoded.
    Price {
        /// Best bid.
        bid: f64,
        /// Best ask.
        ask: f64,
        /// Quote currency.
        currency: Currency,
    },
    /// Nothing went wrong but there is nothing to show, e.g. the currency prompt.
    Info {
        /// Shown as the title as is.
        message: String,
    },
    /// Fetching or decoding failed.
    Error {
        /// Shown after an `Error: ` prefix.
        message: String,
    },
}

impl Outcome {
    /// The prompt asking for a supported currency.
    pub fn prompt() -> Self {
        Outcome::Info {
            message: String::from(PROMPT),
        }
    }

    /// Builds the single menu item for this outcome.
    pub fn to_item(&self, icon: &str) -> MenuItem {
        match self {
            Outcome::Price { bid, ask, currency } => {
                let title = format!("Bitcoin Ask on bitFlyer: {} {}", commaf(*ask), currency);
                MenuItem {
                    kind: String::new(),
                    icon: icon.to_string(),
                    subtitle: format!("Bitcoin Bid on bitFlyer: {} {}", commaf(*bid), currency),
                    arg: title.clone(),
                    title,
                }
            }
            Outcome::Info { message } => MenuItem {
                icon: icon.to_string(),
                title: message.clone(),
                ..MenuItem::default()
            },
            Outcome::Error { message } => MenuItem {
                icon: icon.to_string(),
                title: format!("Error: {}", message),
                ..MenuItem::default()
            },
        }
    }

    /// Wraps [`Self::to_item`] into a one-item document.
    pub fn to_document(&self, icon: &str) -> MenuDocument {
        MenuDocument::single(self.to_item(icon))
    }
}

impl From<TickerError> for Outcome {
    fn from(err: TickerError) -> Self {
        match err {
            TickerError::UnsupportedCurrency(_) => Outcome::prompt(),
            other => Outcome::Error {
                message: other.to_string(),
            },
        }
    }
}
