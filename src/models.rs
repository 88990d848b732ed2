//! Data models for scraped listing cards and single video pages.
//!
//! This module defines the value records produced by the extractors:
//! - [`ListingRecord`]: one card scraped from a category/listing page
//! - [`SingleItemRecord`]: the result of inspecting a single video page
//! - [`ListingRun`]: everything a multi-page import accumulated
//!
//! Every scraped field is an `Option<String>`. Markup on the target site
//! varies between page variants, so a missing node is recorded as `None`
//! rather than failing the record, and an empty string found on the page
//! stays distinguishable from "not present".

use serde::Serialize;

/// Export column names, in the fixed order used by every tabular output.
pub const COLUMNS: [&str; 11] = [
    "video_id",
    "uploader_id",
    "uploader_type",
    "uploader_name",
    "title",
    "video_page_url",
    "thumbnail_url",
    "video_direct_url",
    "duration",
    "views",
    "rating",
];

/// One card scraped from a listing page.
///
/// A record with every field absent is still valid and is still emitted.
/// Field order matches [`COLUMNS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListingRecord {
    /// `data-video-id` on the card root.
    pub video_id: Option<String>,
    /// `data-uploader-id` on the card root.
    pub uploader_id: Option<String>,
    /// `data-uploader-type` on the card root.
    pub uploader_type: Option<String>,
    /// `data-uploader-name` on the card root.
    pub uploader_name: Option<String>,
    /// Display title, trimmed.
    pub title: Option<String>,
    /// Absolute URL of the watch page.
    pub video_page_url: Option<String>,
    /// Lazy-load thumbnail source, or the plain `src` when not lazy-loaded.
    pub thumbnail_url: Option<String>,
    /// Hover-preview media URL.
    pub video_direct_url: Option<String>,
    /// Duration as displayed, e.g. `"12:34"`.
    pub duration: Option<String>,
    /// View count as displayed, e.g. `"1.2M"`.
    pub views: Option<String>,
    /// Rating as displayed, e.g. `"87%"`.
    pub rating: Option<String>,
}

impl ListingRecord {
    /// Field values in [`COLUMNS`] order.
    pub fn fields(&self) -> [Option<&str>; 11] {
        [
            self.video_id.as_deref(),
            self.uploader_id.as_deref(),
            self.uploader_type.as_deref(),
            self.uploader_name.as_deref(),
            self.title.as_deref(),
            self.video_page_url.as_deref(),
            self.thumbnail_url.as_deref(),
            self.video_direct_url.as_deref(),
            self.duration.as_deref(),
            self.views.as_deref(),
            self.rating.as_deref(),
        ]
    }

    /// Rebuild a record from a row of cells in [`COLUMNS`] order.
    ///
    /// Empty cells become `None`; missing trailing cells are treated as empty.
    pub fn from_cells<'a, I>(cells: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut it = cells
            .into_iter()
            .map(|c| (!c.is_empty()).then(|| c.to_string()));
        let mut next = || it.next().flatten();
        ListingRecord {
            video_id: next(),
            uploader_id: next(),
            uploader_type: next(),
            uploader_name: next(),
            title: next(),
            video_page_url: next(),
            thumbnail_url: next(),
            video_direct_url: next(),
            duration: next(),
            views: next(),
            rating: next(),
        }
    }
}

/// The result of inspecting one video page.
///
/// Not aggregated with listing records; used for ad-hoc lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SingleItemRecord {
    /// `og:title` of the page.
    pub title: Option<String>,
    /// `og:image` of the page.
    pub thumbnail_url: Option<String>,
    /// Embeddable player fragment, present only when a media URL was found.
    pub embed_snippet: Option<String>,
    /// The page that was inspected.
    pub source_url: String,
}

/// A listing page that could not be fetched during a run that skips failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedPage {
    /// 1-based page index.
    pub page: u32,
    /// The URL that was requested.
    pub url: String,
    /// Rendered error.
    pub error: String,
}

/// Everything a multi-page listing import produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListingRun {
    /// Records in page order, then card order within each page.
    pub records: Vec<ListingRecord>,
    /// Pages skipped because their fetch failed. Always empty when the run
    /// aborts on the first failure.
    pub failed_pages: Vec<FailedPage>,
}
