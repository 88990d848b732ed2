//! Ordered extraction rules.
//!
//! The target site populates the same information in different places
//! depending on the page variant, so several fields are read through a
//! fallback chain: a slice of [`ExtractionRule`]s evaluated in order, where
//! the first rule that yields a non-empty value wins. Keeping the chain as
//! data makes the order easy to audit and each rule testable on its own.

use scraper::{ElementRef, Selector};

/// One way of reading a value out of a scope element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionRule {
    /// `content` of the first `<meta property="...">` below the scope.
    MetaProperty(&'static str),
    /// An attribute of the first element below the scope matching `selector`.
    DescendantAttr {
        selector: &'static str,
        attr: &'static str,
    },
    /// An attribute of the scope element itself.
    OwnAttr(&'static str),
}

impl ExtractionRule {
    /// Apply the rule. Missing nodes, missing attributes and empty values
    /// all yield `None`.
    pub fn apply(&self, scope: ElementRef<'_>) -> Option<String> {
        let value = match *self {
            ExtractionRule::MetaProperty(property) => {
                let css = format!(r#"meta[property="{property}"]"#);
                first_attr(scope, &css, "content")
            }
            ExtractionRule::DescendantAttr { selector, attr } => first_attr(scope, selector, attr),
            ExtractionRule::OwnAttr(attr) => scope.value().attr(attr),
        }?;
        (!value.is_empty()).then(|| value.to_string())
    }
}

/// Evaluate `rules` in order and return the first present value.
pub fn first_match(rules: &[ExtractionRule], scope: ElementRef<'_>) -> Option<String> {
    rules.iter().find_map(|rule| rule.apply(scope))
}

fn first_attr<'a>(scope: ElementRef<'a>, css: &str, attr: &str) -> Option<&'a str> {
    let selector = Selector::parse(css).ok()?;
    scope.select(&selector).next()?.value().attr(attr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{parse, selector};

    const CHAIN: [ExtractionRule; 2] = [
        ExtractionRule::OwnAttr("data-src"),
        ExtractionRule::OwnAttr("src"),
    ];

    #[test]
    fn test_meta_property() {
        let doc = parse(r#"<head><meta property="og:title" content="Hello"></head>"#);
        let rule = ExtractionRule::MetaProperty("og:title");
        assert_eq!(rule.apply(doc.root_element()).as_deref(), Some("Hello"));
        let missing = ExtractionRule::MetaProperty("og:image");
        assert_eq!(missing.apply(doc.root_element()), None);
    }

    #[test]
    fn test_meta_without_content_is_absent() {
        let doc = parse(r#"<head><meta property="og:title"></head>"#);
        assert_eq!(ExtractionRule::MetaProperty("og:title").apply(doc.root_element()), None);
    }

    #[test]
    fn test_descendant_attr_takes_first() {
        let doc = parse(r#"<video src="one.mp4"></video><video src="two.mp4"></video>"#);
        let rule = ExtractionRule::DescendantAttr { selector: "video", attr: "src" };
        assert_eq!(rule.apply(doc.root_element()).as_deref(), Some("one.mp4"));
    }

    #[test]
    fn test_chain_prefers_earlier_rule() {
        let doc = parse(r#"<img data-src="lazy.jpg" src="plain.jpg">"#);
        let img = doc.select(&selector("img")).next().unwrap();
        assert_eq!(first_match(&CHAIN, img).as_deref(), Some("lazy.jpg"));
    }

    #[test]
    fn test_chain_skips_empty_value() {
        let doc = parse(r#"<img data-src="" src="plain.jpg">"#);
        let img = doc.select(&selector("img")).next().unwrap();
        assert_eq!(first_match(&CHAIN, img).as_deref(), Some("plain.jpg"));
    }

    #[test]
    fn test_chain_all_missing() {
        let doc = parse("<img alt='x'>");
        let img = doc.select(&selector("img")).next().unwrap();
        assert_eq!(first_match(&CHAIN, img), None);
    }
}
