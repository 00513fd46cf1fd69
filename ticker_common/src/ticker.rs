//! bitFlyer ticker payload.
//!
//! Mirrors the JSON object returned by `GET /v1/ticker`. Only `best_bid` and `best_ask`
//! feed the menu; the rest is decoded for logging. Missing or `null` fields fall back
//! to their defaults, a `null` body decodes to an all-default ticker, and unknown
//! fields are ignored.
use serde::{Deserialize, Deserializer};

use crate::result::Result;

/// Ticker snapshot for a single product.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TickerResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub product_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub timestamp: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tick_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub best_bid: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub best_ask: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub best_bid_size: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub best_ask_size: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_bid_depth: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_ask_depth: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub market_bid_size: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub market_ask_size: f64,
    /// Last traded price.
    #[serde(deserialize_with = "null_as_default")]
    pub ltp: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub volume: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub volume_by_product: f64,
}

impl TickerResponse {
    /// Decode a response body.
    pub fn from_json(body: &str) -> Result<Self> {
        let ticker: Option<Self> = serde_json::from_str(body)?;
        Ok(ticker.unwrap_or_default())
    }

    /// Ask minus bid.
    pub fn spread(&self) -> f64 {
        self.best_ask - self.best_bid
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
