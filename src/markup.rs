//! Permissive markup parsing.
//!
//! Target pages are not guaranteed to be well-formed, so parsing goes through
//! html5ever's error-recovering tree builder (via `scraper`). Parsing never
//! fails: malformed input yields a best-effort tree.

use scraper::{Html, Selector};
use tracing::debug;

/// Parse a full HTML document.
pub fn parse(raw: &str) -> Html {
    let document = Html::parse_document(raw);
    if !document.errors.is_empty() {
        debug!(recovered = document.errors.len(), "Parsed markup with recoverable errors");
    }
    document
}

/// Compile a CSS selector that is known at compile time.
///
/// # Panics
///
/// Panics if `css` is not a valid selector. Only use with literals.
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector {css:?}: {e}"))
}
