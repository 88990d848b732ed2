//! Single video page inspection.
//!
//! Reads the Open Graph metadata of one watch page and builds an embeddable
//! player fragment from whichever media URL the page exposes.

use super::rules::{ExtractionRule, first_match};
use crate::error::FetchError;
use crate::fetch::PageSource;
use crate::markup;
use crate::models::SingleItemRecord;
use scraper::Html;
use tracing::{info, instrument};

const TITLE: [ExtractionRule; 1] = [ExtractionRule::MetaProperty("og:title")];

const THUMBNAIL: [ExtractionRule; 1] = [ExtractionRule::MetaProperty("og:image")];

/// Media URL sources, most specific first. Page variants populate these
/// inconsistently, so the order is significant.
const MEDIA_URL: [ExtractionRule; 4] = [
    ExtractionRule::MetaProperty("og:video"),
    ExtractionRule::MetaProperty("og:video:url"),
    ExtractionRule::MetaProperty("og:video:secure_url"),
    ExtractionRule::DescendantAttr {
        selector: "video",
        attr: "src",
    },
];

/// Extract a [`SingleItemRecord`] from an already parsed watch page.
pub fn extract_single(document: &Html, source_url: &str) -> SingleItemRecord {
    let root = document.root_element();
    let media_url = first_match(&MEDIA_URL, root);
    SingleItemRecord {
        title: first_match(&TITLE, root),
        thumbnail_url: first_match(&THUMBNAIL, root),
        embed_snippet: media_url.as_deref().map(embed_snippet),
        source_url: source_url.to_string(),
    }
}

/// Borderless, fullscreen-capable iframe pointing at `media_url`.
pub fn embed_snippet(media_url: &str) -> String {
    let src = media_url.replace('"', "&quot;");
    format!(r#"<iframe src="{src}" frameborder="0" allowfullscreen></iframe>"#)
}

/// Fetch `url` and extract its [`SingleItemRecord`].
///
/// A fetch failure aborts the lookup; no partial record is returned.
#[instrument(level = "info", skip(source))]
pub async fn import_single<S: PageSource>(source: &S, url: &str) -> Result<SingleItemRecord, FetchError> {
    let body = source.fetch(url).await?;
    let document = markup::parse(&body);
    let record = extract_single(&document, url);
    info!(
        has_title = record.title.is_some(),
        has_thumbnail = record.thumbnail_url.is_some(),
        has_embed = record.embed_snippet.is_some(),
        "Extracted video page"
    );
    Ok(record)
}
