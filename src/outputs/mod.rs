//! Output generation for scrape records.
//!
//! # Submodules
//!
//! - [`json`]: Writes [`RawRecord`](crate::models::RawRecord) and
//!   [`CleanedRecord`](crate::models::CleanedRecord) files
//!
//! # Output Structure
//!
//! ```text
//! data/
//! ├── crss_firecrawl_20250506_142501.json   # raw mode, one per run
//! ├── crss_firecrawl_20250506_160012.json
//! └── scraped_data.json                     # cleaned mode, overwritten each run
//! ```

pub mod json;
