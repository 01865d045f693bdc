//! # crss_scrape
//!
//! Scrape a single page through the Firecrawl API and persist the result as
//! a JSON file.
//!
//! ## Output modes
//!
//! - **raw**: `success`, `url`, `markdown` and `html` written to
//!   `<output-dir>/crss_firecrawl_<YYYYMMDD_HHMMSS>.json`
//! - **cleaned**: visible text lines (no script/style/noscript content)
//!   written to `<output-dir>/scraped_data.json`, replacing the last run
//!
//! ## Usage
//!
//! ```sh
//! FIRECRAWL_API_KEY=fc-... crss_scrape -u https://costaricasoftwareservices.com/ -m cleaned
//! ```
//!
//! A failed scrape writes nothing and exits with a non-zero status.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod api;
mod clean;
mod cli;
mod error;
mod fetch;
mod models;
mod outputs;
mod utils;

use api::FirecrawlClient;
use cli::Cli;
use error::ScrapeError;

#[tokio::main]
async fn main() -> ExitCode {
    // --- Tracing init (stderr; stdout carries the user-facing messages) ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();

    let args = Cli::parse();
    debug!(
        url = %args.url,
        mode = ?args.mode,
        output_dir = %args.output_dir.display(),
        api_url = %args.api_url,
        timeout_secs = args.timeout_secs,
        "Parsed CLI arguments"
    );

    match execute(&args).await {
        Ok(path) => {
            let elapsed = start_time.elapsed();
            info!(path = %path.display(), millis = elapsed.as_millis(), "Execution complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let _ = fetch::report_failure(&mut std::io::stdout(), &e);
            error!(error = %e, remote = e.is_remote(), "Scrape run failed");
            ExitCode::FAILURE
        }
    }
}

/// Validate the configuration, build the client and perform the single run.
async fn execute(args: &Cli) -> Result<PathBuf, ScrapeError> {
    let config = args.run_config()?;
    let client =
        FirecrawlClient::new(args.api_key.as_str(), args.api_url.as_str(), args.timeout())?;
    fetch::run(&client, &config).await
}
