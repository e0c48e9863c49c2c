//! # Guardian News Search
//!
//! Command-line front end: runs one search against the Guardian content API
//! and prints the results.
//!
//! ## Usage
//!
//! ```sh
//! API_KEY=... guardian_news_search -q Deliveroo --from-date 2024-01-01
//! ```
//!
//! Logs go to stderr (filter with `RUST_LOG`); stdout carries only results.

use clap::Parser;
use guardian_news_search::cli::Cli;
use guardian_news_search::outputs::render_summary;
use guardian_news_search::GuardianClient;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let args = Cli::parse();
    let request = args.search_request();
    debug!(?request, config = ?args.config, raw = args.raw, "Parsed CLI arguments");

    let config = match args.client_config() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Configuration error; no request sent");
            return Err(e.into());
        }
    };
    info!(endpoint = %config.endpoint(), "Client configured");

    let client = GuardianClient::new(config);
    let response = client.search(&request).await?;
    let status = response.status();

    if args.raw {
        println!("{}", response.body());
    }

    if !response.is_success() {
        let message = response
            .envelope()
            .ok()
            .and_then(|envelope| envelope.response.message)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());
        error!(status = status.as_u16(), %message, "Search failed");
        return Err(format!("search failed with status {}: {}", status.as_u16(), message).into());
    }

    if !args.raw {
        let envelope = response.envelope()?;
        print!("{}", render_summary(&envelope.response));
        info!(results = envelope.response.results.len(), "Search complete");
    }

    Ok(())
}
