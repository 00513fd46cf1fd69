//! Error types shared by the library and the menu binary.
//!
//! Every failure a run can hit ends up as a `TickerError`. The binary never exits on
//! one: it renders the `Display` text into an error menu item, so transport and decode
//! variants print the underlying message verbatim.
use std::io;

use thiserror::Error;

/// Unified error type for fetching and decoding a ticker.
#[derive(Error, Debug)]
pub enum TickerError {
    /// Transport failure (DNS, connect, TLS, timeout, body read).
    #[error("{0}")]
    Transport(#[from] ureq::Error),

    /// The exchange answered with something other than `200 OK`.
    #[error("Response status error({code}): {status}")]
    Status {
        /// Numeric HTTP status code.
        code: u16,
        /// Status line text, e.g. `500 Internal Server Error`.
        status: String,
    },

    /// The response body was not a ticker JSON object.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// I/O error while writing the menu document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Currency code other than `USD` or `JPY`.
    #[error("Unsupported currency: {0:?}")]
    UnsupportedCurrency(String),
}
