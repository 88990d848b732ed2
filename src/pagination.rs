//! Multi-page listing imports.
//!
//! Pages are processed strictly one after another so the accumulated records
//! always follow page order, then card order within a page. Progress is
//! reported inline through a callback; the caller decides how to show it.
//!
//! There is no cross-page deduplication. If the site reorders its listing
//! while a run is in progress, the same video can appear on two pages and
//! will then appear twice in the output.

use crate::error::FetchError;
use crate::fetch::PageSource;
use crate::markup;
use crate::models::{FailedPage, ListingRun};
use crate::scrapers::listing::extract_cards;
use std::fmt;
use tracing::{info, instrument, warn};
use url::Url;

/// What to do when a page in a multi-page run cannot be fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageErrorPolicy {
    /// Stop the run and return the error. Records from earlier pages are
    /// discarded.
    #[default]
    Abort,
    /// Record the failed page, report it, and continue with the next one.
    Skip,
}

/// Per-run settings for [`scrape_listing`].
#[derive(Debug, Clone)]
pub struct ListingOptions {
    /// Cards taken from each page.
    pub max_items_per_page: usize,
    /// Origin that relative watch links resolve against.
    pub origin: Url,
    pub on_page_error: PageErrorPolicy,
}

/// A progress notification emitted during [`scrape_listing`].
///
/// `Display` renders the plain text line a front end would print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// About to fetch page `page` (1-based) at `url`.
    PageStarted { page: u32, url: String },
    /// A card was extracted; `index` is 1-based within its page.
    RecordExtracted { index: usize, title: Option<String> },
    /// A page was skipped because it could not be fetched.
    PageFailed { page: u32, url: String, error: String },
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressEvent::PageStarted { page, url } => write!(f, "[INFO] Page {page}: {url}"),
            ProgressEvent::RecordExtracted { index, title } => {
                write!(f, "  {index}. {}", title.as_deref().unwrap_or("(untitled)"))
            }
            ProgressEvent::PageFailed { page, url, error } => {
                write!(f, "[WARN] Page {page} skipped ({url}): {error}")
            }
        }
    }
}

/// Strip the query string, fragment and any trailing slashes from a listing URL.
pub fn normalize_base(base_url: &str) -> &str {
    let end = base_url.find(['?', '#']).unwrap_or(base_url.len());
    base_url[..end].trim_end_matches('/')
}

/// URL of page `page` (1-based) of the listing at `base_url`.
///
/// Page 1 is `base_url` exactly as given; later pages append `?page=N` to the
/// normalized base.
pub fn page_url(base_url: &str, page: u32) -> String {
    if page <= 1 {
        base_url.to_string()
    } else {
        format!("{}?page={page}", normalize_base(base_url))
    }
}

/// Scrape `page_count` pages of the listing at `base_url`.
///
/// For each page: emits [`ProgressEvent::PageStarted`], fetches and parses it,
/// extracts up to `options.max_items_per_page` cards, emits one
/// [`ProgressEvent::RecordExtracted`] per card, then appends the cards to the
/// run. A `page_count` of zero yields an empty run.
///
/// # Errors
///
/// Under [`PageErrorPolicy::Abort`] the first failed fetch is returned.
/// Under [`PageErrorPolicy::Skip`] this function does not fail; failed pages
/// are listed in [`ListingRun::failed_pages`].
#[instrument(level = "info", skip(source, options, on_progress), fields(max_items = options.max_items_per_page, policy = ?options.on_page_error))]
pub async fn scrape_listing<S, F>(
    source: &S,
    base_url: &str,
    page_count: u32,
    options: &ListingOptions,
    mut on_progress: F,
) -> Result<ListingRun, FetchError>
where
    S: PageSource,
    F: FnMut(&ProgressEvent),
{
    let mut run = ListingRun::default();

    for page in 1..=page_count {
        let url = page_url(base_url, page);
        on_progress(&ProgressEvent::PageStarted {
            page,
            url: url.clone(),
        });

        let body = match source.fetch(&url).await {
            Ok(body) => body,
            Err(e) => match options.on_page_error {
                PageErrorPolicy::Abort => {
                    warn!(page, %url, error = %e, "Page fetch failed; aborting run");
                    return Err(e);
                }
                PageErrorPolicy::Skip => {
                    warn!(page, %url, error = %e, "Page fetch failed; skipping page");
                    let failed = FailedPage {
                        page,
                        url,
                        error: e.to_string(),
                    };
                    on_progress(&ProgressEvent::PageFailed {
                        page: failed.page,
                        url: failed.url.clone(),
                        error: failed.error.clone(),
                    });
                    run.failed_pages.push(failed);
                    continue;
                }
            },
        };

        let records = {
            let document = markup::parse(&body);
            extract_cards(&document, &options.origin, options.max_items_per_page)
        };
        for (i, record) in records.iter().enumerate() {
            on_progress(&ProgressEvent::RecordExtracted {
                index: i + 1,
                title: record.title.clone(),
            });
        }
        info!(page, count = records.len(), "Scraped listing page");
        run.records.extend(records);
    }

    info!(
        pages = page_count,
        records = run.records.len(),
        failed = run.failed_pages.len(),
        "Listing run complete"
    );
    Ok(run)
}
