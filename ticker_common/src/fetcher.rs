//! Fetching ticker snapshots over HTTP.
//!
//! `TickerSource` is the seam between the pipeline and the network. `BitflyerClient`
//! implements it with one blocking `ureq` GET per call: no retries, no auth, no extra
//! headers, and a single global timeout covering connect through body read.
use log::{debug, info};
use ureq::Agent;
use ureq::http::StatusCode;

use crate::config::{Config, TICKER_PATH};
use crate::currency::Currency;
use crate::error::TickerError;
use crate::result::Result;
use crate::ticker::TickerResponse;

/// Something that can produce a ticker snapshot for a currency.
pub trait TickerSource {
    /// Fetch and decode the current ticker.
    fn fetch(&self, currency: Currency) -> Result<TickerResponse>;

    /// Source name, for logs.
    fn name(&self) -> &'static str;
}

/// bitFlyer public ticker client.
pub struct BitflyerClient {
    agent: Agent,
    base_url: String,
}

impl BitflyerClient {
    /// Builds a client from `config`. Non-2xx answers are returned as responses, not
    /// transport errors, so the status can be reported.
    pub fn new(config: &Config) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .http_status_as_error(false)
            .build()
            .into();
        BitflyerClient {
            agent,
            base_url: config.base_url.clone(),
        }
    }

    /// Full request URL, e.g. `https://api.bitflyer.com/v1/ticker?product_code=BTC_JPY`.
    pub fn ticker_url(&self, currency: Currency) -> String {
        format!("{}{}{}", self.base_url, TICKER_PATH, currency)
    }

    /// GET the ticker and return the raw body of a `200 OK` answer.
    pub fn fetch_body(&self, currency: Currency) -> Result<String> {
        let url = self.ticker_url(currency);
        debug!("GET {}", url);

        let mut response = self.agent.get(&url).call()?;
        let status = response.status();
        info!("{} answered {}", self.name(), status.as_u16());

        if status != StatusCode::OK {
            return Err(status_error(status));
        }

        let body = response.body_mut().read_to_string()?;
        Ok(body)
    }
}

impl TickerSource for BitflyerClient {
    fn fetch(&self, currency: Currency) -> Result<TickerResponse> {
        let body = self.fetch_body(currency)?;
        let ticker = TickerResponse::from_json(&body)?;
        debug!(
            "{} {}: bid={} ask={} spread={}",
            ticker.product_code,
            ticker.state,
            ticker.best_bid,
            ticker.best_ask,
            ticker.spread()
        );
        Ok(ticker)
    }

    fn name(&self) -> &'static str {
        "bitflyer"
    }
}

fn status_error(status: StatusCode) -> TickerError {
    let code = status.as_u16();
    let status = match status.canonical_reason() {
        Some(reason) => format!("{} {}", code, reason),
        None => code.to_string(),
    };
    TickerError::Status { code, status }
}
