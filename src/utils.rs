//! Utility functions for output naming, log truncation, and file system setup.

use crate::error::ScrapeError;
use chrono::NaiveDateTime;
use std::path::Path;
use tokio::fs;
use tracing::{debug, instrument};

/// Timestamp layout used in raw-mode filenames, e.g. `20250506_142501`.
pub const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Build `<prefix><YYYYMMDD_HHMMSS>.<ext>` for the given local time.
///
/// Two runs within the same second share a name; runs in different seconds
/// never collide.
///
/// # Examples
///
/// ```ignore
/// let at = NaiveDate::from_ymd_opt(2025, 5, 6).unwrap().and_hms_opt(14, 25, 1).unwrap();
/// assert_eq!(timestamped_filename("crss_firecrawl_", "json", &at), "crss_firecrawl_20250506_142501.json");
/// ```
pub fn timestamped_filename(prefix: &str, ext: &str, at: &NaiveDateTime) -> String {
    format!("{prefix}{}.{ext}", at.format(FILENAME_TIMESTAMP_FORMAT))
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut at the last char boundary at or below `max` bytes
/// and get `"…(+N bytes)"` appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Ensure the output directory exists, creating parents as needed.
///
/// Succeeds without touching anything when the directory is already there.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_output_dir(path: &Path) -> Result<(), ScrapeError> {
    fs::create_dir_all(path)
        .await
        .map_err(|e| ScrapeError::filesystem(path, e))?;
    debug!("Output directory ready");
    Ok(())
}
