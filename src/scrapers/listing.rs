//! Listing page card extraction.
//!
//! A category page renders each video as a `div.video-box.pc.js_video-box`
//! card. Every field of a card is read independently: a lookup that finds
//! nothing leaves that one field `None` and never drops the card or the page.

use super::rules::{ExtractionRule, first_match};
use crate::markup::selector;
use crate::models::ListingRecord;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;
use url::Url;

static CARD: Lazy<Selector> = Lazy::new(|| selector("div.video-box.pc.js_video-box"));
static WATCH_LINK: Lazy<Selector> = Lazy::new(|| selector(r#"a.js_video-box-url[href^="/watch/"]"#));
static THUMB_IMAGE: Lazy<Selector> = Lazy::new(|| selector("img.thumb-image"));
static TITLE_SPAN: Lazy<Selector> = Lazy::new(|| selector("a.video-title-text span"));
static DURATION_SPAN: Lazy<Selector> = Lazy::new(|| selector("div.video-duration span"));
static VIEWS_CONTAINER: Lazy<Selector> = Lazy::new(|| selector("div.info-views-container"));
static VIEWS_SPAN: Lazy<Selector> = Lazy::new(|| selector("span.info-views"));

/// Lazy-load source first, plain source second.
const THUMBNAIL_URL: [ExtractionRule; 2] = [
    ExtractionRule::OwnAttr("data-src"),
    ExtractionRule::OwnAttr("src"),
];

/// Extract up to `max_items` cards from a listing page, in document order.
///
/// Relative watch links are resolved against `origin`.
pub fn extract_cards(document: &Html, origin: &Url, max_items: usize) -> Vec<ListingRecord> {
    let records: Vec<ListingRecord> = document
        .select(&CARD)
        .take(max_items)
        .map(|card| extract_card(card, origin))
        .collect();
    debug!(count = records.len(), max_items, "Extracted listing cards");
    records
}

/// Extract one card. Never fails; unreadable fields are `None`.
pub fn extract_card(card: ElementRef<'_>, origin: &Url) -> ListingRecord {
    let data = |name: &str| card.value().attr(name).map(str::to_string);
    let thumb = card.select(&THUMB_IMAGE).next();
    let (views, rating) = views_and_rating(card);

    ListingRecord {
        video_id: data("data-video-id"),
        uploader_id: data("data-uploader-id"),
        uploader_type: data("data-uploader-type"),
        uploader_name: data("data-uploader-name"),
        title: first_text(card, &TITLE_SPAN),
        video_page_url: video_page_url(card, origin),
        thumbnail_url: thumb.and_then(|img| first_match(&THUMBNAIL_URL, img)),
        video_direct_url: thumb.and_then(|img| img.value().attr("data-mediabook").map(str::to_string)),
        duration: first_text(card, &DURATION_SPAN),
        views,
        rating,
    }
}

fn video_page_url(card: ElementRef<'_>, origin: &Url) -> Option<String> {
    let href = card.select(&WATCH_LINK).next()?.value().attr("href")?;
    origin.join(href).ok().map(String::from)
}

fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope.select(selector).next().map(element_text)
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Cards carry decoy views containers ahead of the real one, so only the
/// last container counts. Its first span is the view count, its second the
/// rating.
fn views_and_rating(card: ElementRef<'_>) -> (Option<String>, Option<String>) {
    let Some(container) = card.select(&VIEWS_CONTAINER).last() else {
        return (None, None);
    };
    let mut spans = container.select(&VIEWS_SPAN).map(element_text);
    let views = spans.next();
    let rating = spans.next();
    (views, rating)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::parse;

    fn origin() -> Url {
        Url::parse("https://www.youporn.com").unwrap()
    }

    const FULL_CARD: &str = r#"
        <div class="video-box pc js_video-box"
             data-video-id="123" data-uploader-id="9" data-uploader-type="channel" data-uploader-name="Studio">
          <a class="js_video-box-url" href="/watch/123/some-slug/">
            <img class="thumb-image" data-src="https://cdn/lazy.jpg" src="https://cdn/blank.gif"
                 data-mediabook="https://cdn/preview.mp4">
          </a>
          <div class="video-duration"><span> 12:34 </span></div>
          <a class="video-title-text" href="/watch/123/some-slug/"><span>
              Some title
          </span></a>
          <div class="info-views-container"><span class="info-views">1.2K</span><span class="info-views">87%</span></div>
        </div>"#;

    fn page(cards: &[&str]) -> Html {
        parse(&format!("<html><body><div class='list'>{}</div></body></html>", cards.concat()))
    }

    #[test]
    fn test_full_card() {
        let records = extract_cards(&page(&[FULL_CARD]), &origin(), 20);
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.video_id.as_deref(), Some("123"));
        assert_eq!(r.uploader_id.as_deref(), Some("9"));
        assert_eq!(r.uploader_type.as_deref(), Some("channel"));
        assert_eq!(r.uploader_name.as_deref(), Some("Studio"));
        assert_eq!(
            r.video_page_url.as_deref(),
            Some("https://www.youporn.com/watch/123/some-slug/")
        );
        assert_eq!(r.thumbnail_url.as_deref(), Some("https://cdn/lazy.jpg"));
        assert_eq!(r.video_direct_url.as_deref(), Some("https://cdn/preview.mp4"));
        assert_eq!(r.title.as_deref(), Some("Some title"));
        assert_eq!(r.duration.as_deref(), Some("12:34"));
        assert_eq!(r.views.as_deref(), Some("1.2K"));
        assert_eq!(r.rating.as_deref(), Some("87%"));
    }

    #[test]
    fn test_missing_identifiers_do_not_block_other_fields() {
        let card = r#"
            <div class="video-box pc js_video-box">
              <a class="video-title-text"><span>Only a title</span></a>
              <div class="video-duration"><span>5:00</span></div>
            </div>"#;
        let records = extract_cards(&page(&[card]), &origin(), 20);
        let r = &records[0];
        assert_eq!(r.video_id, None);
        assert_eq!(r.uploader_id, None);
        assert_eq!(r.uploader_type, None);
        assert_eq!(r.uploader_name, None);
        assert_eq!(r.title.as_deref(), Some("Only a title"));
        assert_eq!(r.duration.as_deref(), Some("5:00"));
    }

    #[test]
    fn test_empty_card_is_still_emitted() {
        let card = r#"<div class="video-box pc js_video-box"></div>"#;
        let records = extract_cards(&page(&[card]), &origin(), 20);
        assert_eq!(records, vec![ListingRecord::default()]);
    }

    #[test]
    fn test_truncates_in_document_order() {
        let cards: Vec<String> = (1..=5)
            .map(|i| format!(r#"<div class="video-box pc js_video-box" data-video-id="{i}"></div>"#))
            .collect();
        let refs: Vec<&str> = cards.iter().map(String::as_str).collect();
        let records = extract_cards(&page(&refs), &origin(), 3);
        let ids: Vec<_> = records.iter().map(|r| r.video_id.as_deref().unwrap()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn test_non_matching_boxes_are_ignored() {
        let other = r#"<div class="video-box mobile" data-video-id="x"></div>"#;
        let card = r#"<div class="video-box pc js_video-box" data-video-id="y"></div>"#;
        let records = extract_cards(&page(&[other, card]), &origin(), 20);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].video_id.as_deref(), Some("y"));
    }

    #[test]
    fn test_last_views_container_wins() {
        let card = r#"
            <div class="video-box pc js_video-box">
              <div class="info-views-container"><span class="info-views">999</span></div>
              <div class="info-views-container">
                <span class="info-views">42</span><span class="info-views">4.5</span>
              </div>
            </div>"#;
        let r = &extract_cards(&page(&[card]), &origin(), 20)[0];
        assert_eq!(r.views.as_deref(), Some("42"));
        assert_eq!(r.rating.as_deref(), Some("4.5"));
    }

    #[test]
    fn test_single_views_span_leaves_rating_absent() {
        let card = r#"
            <div class="video-box pc js_video-box">
              <div class="info-views-container"><span class="info-views">7</span></div>
            </div>"#;
        let r = &extract_cards(&page(&[card]), &origin(), 20)[0];
        assert_eq!(r.views.as_deref(), Some("7"));
        assert_eq!(r.rating, None);
    }

    #[test]
    fn test_thumbnail_falls_back_to_src_and_preview_is_independent() {
        let card = r#"
            <div class="video-box pc js_video-box">
              <img class="thumb-image" src="https://cdn/plain.jpg" data-mediabook="https://cdn/p.mp4">
            </div>"#;
        let r = &extract_cards(&page(&[card]), &origin(), 20)[0];
        assert_eq!(r.thumbnail_url.as_deref(), Some("https://cdn/plain.jpg"));
        assert_eq!(r.video_direct_url.as_deref(), Some("https://cdn/p.mp4"));
    }

    #[test]
    fn test_empty_preview_attribute_stays_empty() {
        let card = r#"
            <div class="video-box pc js_video-box" data-video-id="">
              <img class="thumb-image" src="a.jpg" data-mediabook="">
            </div>"#;
        let r = &extract_cards(&page(&[card]), &origin(), 20)[0];
        assert_eq!(r.video_id.as_deref(), Some(""));
        assert_eq!(r.video_direct_url.as_deref(), Some(""));
        assert_eq!(r.thumbnail_url.as_deref(), Some("a.jpg"));
    }

    #[test]
    fn test_preview_absent_without_attribute() {
        let card = r#"
            <div class="video-box pc js_video-box">
              <img class="thumb-image" src="a.jpg">
            </div>"#;
        let r = &extract_cards(&page(&[card]), &origin(), 20)[0];
        assert_eq!(r.video_direct_url, None);
    }

    #[test]
    fn test_non_watch_link_is_ignored() {
        let card = r#"
            <div class="video-box pc js_video-box">
              <a class="js_video-box-url" href="/channel/studio/">studio</a>
            </div>"#;
        let r = &extract_cards(&page(&[card]), &origin(), 20)[0];
        assert_eq!(r.video_page_url, None);
    }

    #[test]
    fn test_zero_max_items() {
        assert!(extract_cards(&page(&[FULL_CARD]), &origin(), 0).is_empty());
    }
}
