//!
//! Building blocks for the bitFlyer ticker menu.
//!
//! This crate aggregates:
//! - `error` — unified error type `TickerError` used across the workspace.
//! - `result` — handy `Result<T, TickerError>` alias.
//! - `config` — fixed endpoint, icon and timeout settings.
//! - `currency` — the quote currencies accepted on the command line.
//! - `ticker` — the bitFlyer ticker payload.
//! - `humanize` — thousands-separator number formatting.
//! - `menu` — launcher menu item and document types.
//! - `outcome` — the three terminal shapes of a run.
//! - `fetcher` — the HTTP ticker source.
//! - `pipeline` — validate, fetch and decode in one pass.
#![warn(missing_docs)]
pub mod config;
pub mod currency;
pub mod error;
pub mod fetcher;
pub mod humanize;
pub mod menu;
pub mod outcome;
pub mod pipeline;
pub mod result;
pub mod ticker;

pub use config::Config;
pub use currency::Currency;
pub use error::TickerError;
pub use fetcher::{BitflyerClient, TickerSource};
pub use menu::{MenuDocument, MenuItem};
pub use outcome::Outcome;
pub use result::Result;
pub use ticker::TickerResponse;
