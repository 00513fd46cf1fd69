//! Fixed endpoint, icon and timeout settings.
use std::time::Duration;

/// bitFlyer public API host.
pub const BASE_URL: &str = "https://api.bitflyer.com";
/// Ticker path; the currency code is appended to complete the product code.
pub const TICKER_PATH: &str = "/v1/ticker?product_code=BTC_";
/// Icon shipped next to the executable, relative to the launcher's working dir.
pub const ICON_PATH: &str = "./icon.png";
/// Prompt shown when the argument is not a supported currency.
pub const PROMPT: &str = "Please enter `USD` or `JPY`";
/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Immutable settings handed to the fetcher and the formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Scheme and host of the ticker API, without a trailing slash.
    pub base_url: String,
    /// Icon reference written into every menu item.
    pub icon: String,
    /// Upper bound for the whole request, connect to last body byte.
    pub timeout: Duration,
}

impl Config {
    /// Settings pointing at `base_url`, everything else default.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            base_url: base_url.into(),
            ..Config::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: String::from(BASE_URL),
            icon: String::from(ICON_PATH),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
