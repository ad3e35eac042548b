// src/extract/html.rs
// =============================================================================
// This module extracts raw hyperlink targets from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Note that we only extract here. Resolving the hrefs to absolute URLs is
// handled separately in urls.rs, because the walker needs to normalize and
// filter the results before deciding what to visit.
// =============================================================================

use scraper::{Html, Selector};

// Extracts every href value from anchor tags in an HTML document
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//
// Returns: Vec<String> of raw href values, still possibly relative
//
// Example:
//   html = "<a href='/docs'>Docs</a> <a href='https://other.com'>Other</a>"
//   result = ["/docs", "https://other.com"]
//
// Broken or partial HTML is fine: html5ever recovers the way a browser
// would, so at worst we find fewer links.
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let mut hrefs = Vec::new();

    // Parse the HTML into a document
    let document = Html::parse_document(html);

    // Create a CSS selector to find all <a> tags with an href attribute
    // Selector::parse returns Result, so we use .unwrap() which panics on error
    // This is OK here because our selector is a constant and known to be valid
    let selector = Selector::parse("a[href]").unwrap();

    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            hrefs.push(href.to_string());
        }
    }

    hrefs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_single_href() {
        let html = r#"<a href="/docs">Docs</a>"#;
        assert_eq!(extract_hrefs(html), vec!["/docs"]);
    }

    #[test]
    fn test_extract_multiple_hrefs() {
        let html = r#"
            <a href="https://rust-lang.org">Rust</a>
            <a href="/docs">Docs</a>
            <a href="../about">About</a>
        "#;
        let hrefs = extract_hrefs(html);
        assert_eq!(hrefs.len(), 3);
        assert!(hrefs.contains(&"/docs".to_string()));
    }

    #[test]
    fn test_anchor_without_href_is_skipped() {
        let html = r#"<a name="top">Top</a><a href="/a">A</a>"#;
        assert_eq!(extract_hrefs(html), vec!["/a"]);
    }

    #[test]
    fn test_malformed_html_is_tolerated() {
        // Unclosed tags and stray brackets: html5ever still finds the anchor
        let html = r#"<div><a href="/a">A<div></p>"#;
        assert_eq!(extract_hrefs(html), vec!["/a"]);
    }

    #[test]
    fn test_no_links() {
        assert!(extract_hrefs("<p>just text</p>").is_empty());
    }
}
