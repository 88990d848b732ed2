//! # listing_importer
//!
//! Scrapes category listing pages and single watch pages of a video site
//! into typed records, and exports accumulated listing records as CSV or XLSX.
//!
//! ## Pipeline
//!
//! 1. **Fetch**: [`fetch::HttpFetcher`] retrieves a page (one attempt, fixed
//!    timeout, browser-like `User-Agent`)
//! 2. **Parse**: [`markup::parse`] builds a best-effort tree from any markup
//! 3. **Extract**: [`scrapers`] turn cards or Open Graph metadata into records,
//!    degrading unreadable fields to `None`
//! 4. **Paginate**: [`pagination::scrape_listing`] walks pages in order and
//!    reports progress through a callback
//! 5. **Export**: [`outputs::export`] writes the fixed 11-column table

pub mod config;
pub mod error;
pub mod fetch;
pub mod markup;
pub mod models;
pub mod outputs;
pub mod pagination;
pub mod scrapers;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use error::{ConfigError, ExportError, FetchCause, FetchError};
pub use fetch::{HttpFetcher, PageSource};
pub use models::{COLUMNS, FailedPage, ListingRecord, ListingRun, SingleItemRecord};
pub use outputs::{ExportFormat, export};
pub use pagination::{ListingOptions, PageErrorPolicy, ProgressEvent, scrape_listing};
pub use scrapers::listing::extract_cards;
pub use scrapers::video::{extract_single, import_single};
