//! Ticker Menu — prints the current Bitcoin bid/ask on bitFlyer as a single launcher
//! menu item (Alfred script filter JSON).
//!
//! Usage example (CLI):
//! ```bash
//! ticker_menu jpy
//! {"items":[{"type":"","icon":"./icon.png","title":"Bitcoin Ask on bitFlyer: 9,515,500 JPY",...}]}
//! ```
//!
//! Every run writes exactly one JSON line to stdout and exits with status 0: an
//! unsupported currency yields the prompt item, a failed request or an unreadable body
//! yields an `Error: ...` item. Undeclared flags are ignored wherever they appear.
//! Logs go to stderr (`RUST_LOG=debug` for details).
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use clap::error::ErrorKind;
use log::{debug, error, warn};
use ticker_common::pipeline;
use ticker_common::{BitflyerClient, Config, Outcome};
use std::env;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logger();

    let args = match Args::try_parse_lenient(env::args_os()) {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            if let Err(e) = e.print() {
                error!("Failed to print usage: {}", e);
            }
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            warn!("Invalid arguments: {}", e);
            emit(&Outcome::prompt(), &Config::default());
            return ExitCode::SUCCESS;
        }
    };

    if !args.ignored.is_empty() {
        debug!("Ignoring flags: {:?}", args.ignored);
    }

    let config = args.config();
    let client = BitflyerClient::new(&config);
    let outcome = pipeline::run(&client, args.currency.as_deref());
    emit(&outcome, &config);

    ExitCode::SUCCESS
}

/// Writes the outcome's menu document to stdout.
fn emit(outcome: &Outcome, config: &Config) {
    let document = outcome.to_document(&config.icon);
    if let Err(e) = document.write_to(io::stdout().lock()) {
        error!("Failed to write menu: {}", e);
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
