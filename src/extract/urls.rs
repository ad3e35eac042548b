// src/extract/urls.rs
// =============================================================================
// This module handles URL resolution and normalization.
//
// Two jobs:
// - Resolving: turning a raw href (possibly relative) into an absolute URL
// - Normalizing: stripping the query and fragment so that two links to the
//   same page compare as equal
//
// We use the `url` crate which:
// - Parses and validates URLs
// - Resolves relative references the same way a browser does (url.join)
// - Lets us clear individual components (set_query / set_fragment)
//
// Rust concepts:
// - Option<T>: For operations that may produce no usable URL
// - Ownership: normalize takes the Url by value because it mutates it
// =============================================================================

use url::Url;

// Resolves a raw href against the page it appeared on
//
// Parameters:
//   base: the URL of the page the href was found on
//   href: the raw attribute value (might be relative, might be absolute)
//
// Returns: Some(absolute Url) or None if the href isn't crawlable
//
// Examples:
//   base = "https://example.com/page"
//   href = "/docs" -> Some("https://example.com/docs")
//   href = "../other" -> Some("https://example.com/other")
//   href = "mailto:hi@example.com" -> None
pub fn resolve_link(base: &Url, href: &str) -> Option<Url> {
    // Skip anchors and special protocols
    if href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("javascript:")
    {
        return None;
    }

    // join() handles both relative and absolute hrefs:
    // an absolute href simply replaces the base
    let url = base.join(href).ok()?;

    // Only HTTP/HTTPS links are worth visiting
    match url.scheme() {
        "http" | "https" => Some(url),
        _ => None,
    }
}

// Normalizes a URL for comparison purposes
//
// Strips the query string and the fragment, so these all become one URL:
//   https://example.com/a
//   https://example.com/a?x=1
//   https://example.com/a#section
//
// Normalizing an already-normalized URL changes nothing, so it's safe to
// apply more than once.
pub fn normalize(mut url: Url) -> String {
    url.set_query(None);
    url.set_fragment(None);
    url.to_string()
}

// Extracts the host component of a URL string
//
// Returns: Some("example.com") for "https://example.com/path"
//          None if the string doesn't parse or has no host
pub fn host_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed.host_str().map(|host| host.to_string())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does normalize take Url by value?
//    - set_query and set_fragment mutate the Url in place
//    - Taking ownership means the caller hands the Url over and we're free
//      to modify it without cloning
//
// 2. What is the ? on base.join(href).ok()?;
//    - join() returns Result, .ok() converts it to Option
//    - ? on an Option returns None early if there's no value
//
// 3. Why strip the query string at all?
//    - Pages like /list?page=1, /list?page=2 often render the same links
//    - Treating them as one URL keeps the crawl finite and focused
//    - The trade-off: genuinely different query pages are only visited once
//
// 4. What does host_str() return?
//    - Option<&str> with the host portion of the URL
//    - Covers both named hosts ("example.com") and IP addresses
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_link() {
        let base = Url::parse("https://example.com/page").unwrap();
        let result = resolve_link(&base, "/docs");
        assert_eq!(result.unwrap().to_string(), "https://example.com/docs");
    }

    #[test]
    fn test_resolve_absolute_link() {
        let base = Url::parse("https://example.com/page").unwrap();
        let result = resolve_link(&base, "https://other.com/x");
        assert_eq!(result.unwrap().to_string(), "https://other.com/x");
    }

    #[test]
    fn test_resolve_parent_directory() {
        let base = Url::parse("https://example.com/docs/page").unwrap();
        let result = resolve_link(&base, "../about");
        assert_eq!(result.unwrap().to_string(), "https://example.com/about");
    }

    #[test]
    fn test_skip_anchor() {
        let base = Url::parse("https://example.com/page").unwrap();
        assert!(resolve_link(&base, "#section").is_none());
    }

    #[test]
    fn test_skip_mailto() {
        let base = Url::parse("https://example.com/page").unwrap();
        assert!(resolve_link(&base, "mailto:test@example.com").is_none());
    }

    #[test]
    fn test_skip_non_http_scheme() {
        let base = Url::parse("https://example.com/page").unwrap();
        assert!(resolve_link(&base, "ftp://example.com/file").is_none());
    }

    #[test]
    fn test_normalize_strips_query_and_fragment() {
        let url = Url::parse("https://example.com/a?x=1#frag").unwrap();
        assert_eq!(normalize(url), "https://example.com/a");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let url = Url::parse("https://example.com/a?x=1#frag").unwrap();
        let once = normalize(url);
        let twice = normalize(Url::parse(&once).unwrap());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_host_of() {
        assert_eq!(host_of("https://docs.example.com/page/1"), Some("docs.example.com".to_string()));
        assert_eq!(host_of("not a url"), None);
    }
}
