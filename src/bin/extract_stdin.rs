//! Reads a product page from stdin and prints its record as JSON to stdout.
//!
//! Logging goes to stderr; set `RUST_LOG=debug` to trace the extractors.

use std::io::{self, Read};
use std::process::ExitCode;

use product_page_extract::extract_bytes;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        tracing::error!(error = %err, "failed to read stdin");
        return ExitCode::FAILURE;
    }

    let page = match extract_bytes(&html) {
        Ok(page) => page,
        Err(err) => {
            tracing::error!(error = %err, "extraction failed");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&page) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize page record");
            ExitCode::FAILURE
        }
    }
}
