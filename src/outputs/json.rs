//! JSON output for scrape records.
//!
//! Records are written as UTF-8, pretty-printed with two-space indentation.
//! Non-ASCII characters are emitted literally, never as `\u` escapes.

use crate::error::ScrapeError;
use serde::Serialize;
use std::path::Path;
use tokio::fs;
use tracing::{info, instrument};

/// Filename prefix for raw-mode output; followed by a `YYYYMMDD_HHMMSS` stamp.
pub const RAW_FILE_PREFIX: &str = "crss_firecrawl_";

/// Fixed filename for cleaned-mode output.
pub const CLEANED_FILE_NAME: &str = "scraped_data.json";

/// Serialize `record` and write it to `path`, replacing any existing file.
///
/// The parent directory must already exist.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_record<T: Serialize>(record: &T, path: &Path) -> Result<(), ScrapeError> {
    let json = serde_json::to_string_pretty(record)?;

    fs::write(path, &json)
        .await
        .map_err(|e| ScrapeError::filesystem(path, e))?;
    info!(bytes = json.len(), "Wrote JSON record");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CleanedRecord, RawRecord};

    #[tokio::test]
    async fn test_write_record_pretty_and_literal_utf8() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CLEANED_FILE_NAME);
        let record = CleanedRecord {
            clean_text: vec!["Café ☕".into(), "Hello".into()],
        };

        write_record(&record, &path).await.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "{\n  \"clean_text\": [\n    \"Café ☕\",\n    \"Hello\"\n  ]\n}"
        );
    }

    #[tokio::test]
    async fn test_write_record_overwrites_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join(CLEANED_FILE_NAME);
        std::fs::write(&path, "stale contents that are longer than the record").unwrap();

        let record = RawRecord {
            success: true,
            url: "https://example.com/".into(),
            markdown: Some("# Example".into()),
            html: None,
        };
        write_record(&record, &path).await.unwrap();

        let parsed: RawRecord =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, record);
    }

    #[tokio::test]
    async fn test_write_record_missing_parent_is_filesystem_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("absent").join(CLEANED_FILE_NAME);
        let record = CleanedRecord { clean_text: vec![] };

        let err = write_record(&record, &path).await.unwrap_err();
        assert!(matches!(err, ScrapeError::Filesystem { .. }));
        assert!(!err.is_remote());
    }
}
