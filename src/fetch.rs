//! The fetch-and-persist run.
//!
//! One run is a straight line:
//! 1. Issue one scrape request for the target URL (markdown + HTML)
//! 2. Stop with a remote failure if the API did not succeed; nothing is written
//! 3. Build the record for the selected [`OutputMode`]
//! 4. Ensure the output directory exists and write the record as JSON

use crate::api::ScrapeApi;
use crate::clean::clean_html;
use crate::cli::OutputMode;
use crate::error::ScrapeError;
use crate::models::{CleanedRecord, RawRecord, ScrapeData, ScrapeFormat, ScrapeResponse};
use crate::outputs::json::{self, CLEANED_FILE_NAME, RAW_FILE_PREFIX};
use crate::utils::{ensure_output_dir, timestamped_filename};
use chrono::Local;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info, instrument};
use url::Url;

/// Formats requested on every run, whatever the output mode.
pub const REQUESTED_FORMATS: [ScrapeFormat; 2] = [ScrapeFormat::Markdown, ScrapeFormat::Html];

/// Settings for a single run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub target_url: Url,
    pub mode: OutputMode,
    pub output_dir: PathBuf,
}

impl RunConfig {
    /// Parse and check the target URL; only `http` and `https` are accepted.
    pub fn new(
        target_url: &str,
        mode: OutputMode,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self, ScrapeError> {
        let target_url = Url::parse(target_url.trim())?;
        if !matches!(target_url.scheme(), "http" | "https") {
            return Err(ScrapeError::UnsupportedScheme(target_url.scheme().to_string()));
        }
        Ok(Self {
            target_url,
            mode,
            output_dir: output_dir.into(),
        })
    }
}

/// Scrape the configured page and persist it. Returns the written file's path.
///
/// A failed scrape returns before the output directory is touched.
#[instrument(level = "info", skip_all, fields(url = %config.target_url, mode = ?config.mode))]
pub async fn run<A: ScrapeApi>(api: &A, config: &RunConfig) -> Result<PathBuf, ScrapeError> {
    let url = config.target_url.as_str();
    println!("Scraping {url} ...");

    let response = api.scrape(url, &REQUESTED_FORMATS).await?;
    let data = accept(response)?;
    if let Some(meta) = &data.metadata {
        debug!(
            source_url = meta.source_url.as_deref().unwrap_or_default(),
            status_code = meta.status_code,
            title = meta.title.as_deref().unwrap_or_default(),
            page_error = meta.error.as_deref().unwrap_or_default(),
            "Page metadata"
        );
    }

    let path = match config.mode {
        OutputMode::Raw => {
            let record = RawRecord {
                success: true,
                url: url.to_string(),
                markdown: data.markdown,
                html: data.html,
            };
            ensure_output_dir(&config.output_dir).await?;
            let filename =
                timestamped_filename(RAW_FILE_PREFIX, "json", &Local::now().naive_local());
            let path = config.output_dir.join(filename);
            json::write_record(&record, &path).await?;
            path
        }
        OutputMode::Cleaned => {
            let html = data.html.ok_or_else(|| {
                ScrapeError::Remote("scraping API response is missing html".into())
            })?;
            let record = CleanedRecord {
                clean_text: clean_html(&html),
            };
            info!(lines = record.clean_text.len(), "Cleaned page text");
            ensure_output_dir(&config.output_dir).await?;
            let path = config.output_dir.join(CLEANED_FILE_NAME);
            json::write_record(&record, &path).await?;
            path
        }
    };

    println!("Scraping complete. File saved at: {}", path.display());
    Ok(path)
}

/// Print the console line for a failed run.
///
/// Only remote failures get a console line; the rest are left to the log.
pub fn report_failure<W: Write>(out: &mut W, err: &ScrapeError) -> io::Result<()> {
    if err.is_remote() {
        writeln!(out, "Error while scraping: {err}")?;
    }
    Ok(())
}

/// Unwrap a successful response, or explain why it is not one.
fn accept(response: ScrapeResponse) -> Result<ScrapeData, ScrapeError> {
    if !response.success {
        let reason = response.error.as_deref().unwrap_or("no error message given");
        return Err(ScrapeError::Remote(format!(
            "scraping API reported failure: {reason}"
        )));
    }
    response.data.ok_or_else(|| {
        ScrapeError::Remote("scraping API reported success but returned no data".into())
    })
}
