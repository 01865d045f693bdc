//! Error taxonomy for a scrape run.
//!
//! Failures fall into two families:
//! - **Remote**: the scraping API could not be reached or reported failure
//!   ([`ScrapeError::Remote`], [`ScrapeError::Transport`]).
//! - **Filesystem**: the output directory or file could not be written
//!   ([`ScrapeError::Filesystem`]).
//!
//! Neither family is retried.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The API answered but reported failure, or the answer was unusable.
    #[error("{0}")]
    Remote(String),

    /// The request never produced an answer (DNS, TLS, timeout, decode).
    #[error("request to scraping API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode record as JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid target URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("unsupported URL scheme `{0}` (expected http or https)")]
    UnsupportedScheme(String),
}

impl ScrapeError {
    /// `true` when the failure came from the scraping API side.
    pub fn is_remote(&self) -> bool {
        matches!(self, ScrapeError::Remote(_) | ScrapeError::Transport(_))
    }

    pub fn filesystem(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScrapeError::Filesystem {
            path: path.into(),
            source,
        }
    }
}
