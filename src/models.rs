//! Data models for the scraping API and the records written to disk.
//!
//! - [`ScrapeRequest`] / [`ScrapeResponse`]: the Firecrawl `/v1/scrape` wire format
//! - [`RawRecord`]: raw-mode output (markdown and HTML verbatim)
//! - [`CleanedRecord`]: cleaned-mode output (visible text lines only)

use serde::{Deserialize, Serialize};

/// Content formats the API can return for a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrapeFormat {
    Markdown,
    Html,
}

/// Body of a `POST /v1/scrape` call.
#[derive(Debug, Serialize)]
pub struct ScrapeRequest<'a> {
    pub url: &'a str,
    pub formats: &'a [ScrapeFormat],
}

/// Envelope returned by the scraping API.
///
/// On failure Firecrawl answers `{"success": false, "error": "..."}`,
/// usually alongside a 4xx/5xx status.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScrapeResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<ScrapeData>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Page content, one field per requested format.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScrapeData {
    pub markdown: Option<String>,
    pub html: Option<String>,
    pub metadata: Option<PageMetadata>,
}

/// Subset of the page metadata Firecrawl attaches to every document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    #[serde(rename = "sourceURL")]
    pub source_url: Option<String>,
    pub status_code: Option<u16>,
    pub title: Option<String>,
    pub error: Option<String>,
}

/// Raw-mode record. Field order is the on-disk key order.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RawRecord {
    pub success: bool,
    pub url: String,
    pub markdown: Option<String>,
    pub html: Option<String>,
}

/// Cleaned-mode record: the visible text of the page, one trimmed line per entry.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CleanedRecord {
    pub clean_text: Vec<String>,
}
