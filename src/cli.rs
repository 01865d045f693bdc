//! Command-line interface definitions.
//!
//! Every option can also come from an environment variable so the API key
//! never has to appear on the command line or in source.

use crate::api::DEFAULT_API_URL;
use crate::error::ScrapeError;
use crate::fetch::RunConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

/// What to persist from a successful scrape.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Markdown and HTML verbatim, in a timestamped file
    Raw,
    /// Visible text lines only, in a fixed-name file
    Cleaned,
}

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Raw markdown + HTML into ./data/crss_firecrawl_<timestamp>.json
/// FIRECRAWL_API_KEY=fc-... crss_scrape -u https://costaricasoftwareservices.com/
///
/// # Cleaned text lines into ./data/scraped_data.json
/// crss_scrape -u https://example.com/ -k fc-... --mode cleaned
/// ```
#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Page to scrape
    #[arg(short, long, env = "SCRAPE_TARGET_URL")]
    pub url: String,

    /// Firecrawl API key
    #[arg(short = 'k', long, env = "FIRECRAWL_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Output mode
    #[arg(short, long, env = "SCRAPE_MODE", value_enum, default_value_t = OutputMode::Raw)]
    pub mode: OutputMode,

    /// Directory the JSON file is written to
    #[arg(short, long, env = "SCRAPE_OUTPUT_DIR", default_value = "data")]
    pub output_dir: PathBuf,

    /// Base URL of the Firecrawl API
    #[arg(long, env = "FIRECRAWL_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds (no timeout when omitted)
    #[arg(long, env = "FIRECRAWL_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl Cli {
    /// Validate the target and bundle the per-run settings.
    pub fn run_config(&self) -> Result<RunConfig, ScrapeError> {
        RunConfig::new(&self.url, self.mode, self.output_dir.clone())
    }

    /// Request timeout, `None` when `--timeout-secs` was not given.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
