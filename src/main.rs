//! easy-money CLI
//!
//! Command-line front end for the money codec.
//!
//! # Usage
//!
//! ```bash
//! easy-money format 123456 --unit '$' --delimiter ,      # $1,234.56
//! easy-money parse '$1,234.56 CR' --delimiter ,          # -123456
//! easy-money pattern 12345 '%07.2m'                      # 0000123.45
//! easy-money batch amounts.csv --direction to-cents > cents.csv
//! ```
//!
//! Diagnostics go to stderr through `tracing`; set `RUST_LOG=debug` to see
//! parse fallbacks and skipped batch rows.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (invalid options, file not found, write failure, etc.)

use easy_money::cli;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = cli::parse_args();

    let mut output = std::io::stdout();
    if let Err(e) = cli::run(&args, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
