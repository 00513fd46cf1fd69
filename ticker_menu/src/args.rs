//! Command-line arguments for the ticker menu.
//!
//! The launcher passes just the currency. The remaining flags exist for local runs and
//! tests; they can also be set through the environment. Flags this binary does not
//! declare are accepted anywhere on the command line and ignored.
use std::ffi::OsString;
use std::time::Duration;

use clap::Parser;
use ticker_common::config::{BASE_URL, DEFAULT_TIMEOUT_SECS};
use ticker_common::Config;

/// Declared flags that take a value, either `--flag value` or `--flag=value`.
const VALUE_FLAGS: [&str; 2] = ["--base-url", "--timeout"];
/// Declared flags without a value.
const BARE_FLAGS: [&str; 4] = ["-h", "--help", "-V", "--version"];

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Bitcoin bid/ask from bitFlyer as a launcher menu item", long_about = None)]
pub struct Args {
    /// Quote currency, `USD` or `JPY` (any case).
    pub currency: Option<String>,

    /// Ignored.
    #[arg(hide = true)]
    pub rest: Vec<String>,

    /// Ticker API host.
    #[arg(long, env = "TICKER_MENU_BASE_URL", default_value = BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds.
    #[arg(long, env = "TICKER_MENU_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Undeclared flags dropped before parsing.
    #[arg(skip)]
    pub ignored: Vec<String>,
}

impl Args {
    /// Parses `raw` (program name first) after dropping every flag that is not
    /// declared above. Arguments after `--` are left untouched.
    pub fn try_parse_lenient<I>(raw: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut raw = raw.into_iter();
        let mut kept: Vec<OsString> = raw.next().into_iter().collect();
        let mut ignored = Vec::new();

        while let Some(arg) = raw.next() {
            let text = arg.to_string_lossy().into_owned();
            if text == "--" {
                kept.push(arg);
                kept.extend(raw.by_ref());
                break;
            }
            if !text.starts_with('-') || text == "-" {
                kept.push(arg);
                continue;
            }

            let (name, inline_value) = match text.split_once('=') {
                Some((name, _)) => (name, true),
                None => (text.as_str(), false),
            };
            if VALUE_FLAGS.contains(&name) {
                kept.push(arg);
                if !inline_value {
                    kept.extend(raw.next());
                }
            } else if BARE_FLAGS.contains(&name) {
                kept.push(arg);
            } else {
                ignored.push(text);
            }
        }

        let mut args = Args::try_parse_from(kept)?;
        args.ignored = ignored;
        Ok(args)
    }

    /// Settings for the fetcher and formatter.
    pub fn config(&self) -> Config {
        let mut config = Config::with_base_url(self.base_url.trim_end_matches('/'));
        config.timeout = Duration::from_secs(self.timeout);
        config
    }
}
