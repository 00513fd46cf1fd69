//! One run of the menu: validate the argument, fetch, decode, and settle on an
//! [`Outcome`].
use log::warn;

use crate::currency::Currency;
use crate::fetcher::TickerSource;
use crate::outcome::Outcome;
use crate::result::Result;

/// Runs the whole pipeline against `source`. Never fails: every error becomes an
/// `Outcome::Info` or `Outcome::Error`.
///
/// An unsupported currency returns the prompt without touching `source`.
pub fn run<S: TickerSource + ?Sized>(source: &S, raw_currency: Option<&str>) -> Outcome {
    match quote(source, raw_currency) {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!("{}: {}", source.name(), e);
            Outcome::from(e)
        }
    }
}

fn quote<S: TickerSource + ?Sized>(source: &S, raw_currency: Option<&str>) -> Result<Outcome> {
    let currency = Currency::parse_arg(raw_currency)?;
    let ticker = source.fetch(currency)?;
    Ok(Outcome::Price {
        bid: ticker.best_bid,
        ask: ticker.best_ask,
        currency,
    })
}
