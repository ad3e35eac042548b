// src/crawl/frontier.rs
// =============================================================================
// This module implements the frontier walker, the heart of the crawler.
//
// How it works:
// 1. Start with the initial URL in the frontier set
// 2. Pop any URL from the frontier and mark it visited
// 3. Fetch the page HTML (failures are warned about and skipped)
// 4. Resolve and normalize every link on the page
// 5. Add same-host links to the frontier (if not already seen)
// 6. Repeat until the frontier is empty
//
// The two sets are the whole state of the crawl:
// - frontier: discovered but not yet fetched
// - visited: fetched (successfully or not), never retried
// A URL leaves the frontier before it enters visited, so the sets never
// overlap, and a URL is only admitted when it's in neither. That's what
// guarantees the loop terminates on a finite site.
//
// Politeness:
// - Pauses between requests to avoid overwhelming servers
// - Only crawls one host, never wandering off-site
//
// Rust concepts:
// - HashSet: To track URLs (O(1) lookup, no duplicates by construction)
// - Generics: The walker works with any Fetcher implementation
// =============================================================================

use std::collections::HashSet;
use url::Url;

use crate::extract::{extract_hrefs, normalize, resolve_link};
use crate::fetch::Fetcher;

use super::CrawlConfig;

// Walks the crawl frontier until there's nothing left to visit
//
// Owns both sets exclusively. Nothing else reads or writes them while the
// crawl runs, so no locking is ever needed.
pub struct FrontierWalker<F> {
    config: CrawlConfig,
    fetcher: F,
    // URLs discovered but not fetched yet
    frontier: HashSet<String>,
    // URLs we already fetched, including ones that failed
    visited: HashSet<String>,
}

impl<F: Fetcher> FrontierWalker<F> {
    // Creates a walker with the frontier seeded with the start URL
    pub fn new(config: CrawlConfig, fetcher: F) -> Self {
        let mut frontier = HashSet::new();
        frontier.insert(config.start_url.clone());

        Self {
            config,
            fetcher,
            frontier,
            visited: HashSet::new(),
        }
    }

    // Runs the crawl to completion
    //
    // Returns: every visited URL, sorted lexicographically
    //
    // This never fails as a whole. Individual pages can fail to fetch, and
    // that just means they contribute no links. The only error the program
    // treats as fatal (a bad start URL) is caught back in CrawlConfig::new,
    // before a walker ever exists.
    pub async fn run(mut self) -> Vec<String> {
        while let Some(current) = self.next_url() {
            // Skip if already visited
            // The admission checks below make this impossible, but it
            // costs one lookup to keep the invariant local and obvious
            if self.visited.contains(&current) {
                continue;
            }

            // Mark as visited before fetching, so even a failed page is
            // never tried twice
            self.visited.insert(current.clone());

            println!("  Crawling: {}", current);

            match self.fetcher.fetch(&current).await {
                Ok(html) => {
                    self.admit_links(&current, &html);

                    // Polite crawling: small pause between requests
                    // Zero (used by tests) skips the timer entirely
                    if !self.config.delay.is_zero() {
                        tokio::time::sleep(self.config.delay).await;
                    }
                }
                Err(e) => {
                    // The page stays in visited so we won't retry it,
                    // it just contributes no links
                    eprintln!("  Warning: could not retrieve {}: {}", current, e);
                }
            }
        }

        // Frontier drained: the visited set is the final result
        let mut links: Vec<String> = self.visited.into_iter().collect();
        links.sort();
        links
    }

    // Takes an arbitrary URL out of the frontier
    //
    // HashSet has no pop(), so we grab whichever element the iterator
    // yields first and remove it. Which one that is depends on the hash
    // order; the crawl doesn't care, since every admitted URL gets
    // visited eventually no matter the order.
    fn next_url(&mut self) -> Option<String> {
        let next = self.frontier.iter().next().cloned();
        if let Some(url) = &next {
            self.frontier.remove(url);
        }
        next
    }

    // Resolves every link on a fetched page and admits the acceptable
    // ones into the frontier
    //
    // A link is admitted only if ALL of these hold:
    // 1. It resolves to an http(s) URL
    // 2. Its host is exactly the configured domain. Exact equality, not
    //    substring matching: "example.com.evil.net" must not pass a check
    //    for "example.com"
    // 3. It starts with the configured prefix (when one is set)
    // 4. It isn't already visited
    // 5. It isn't already in the frontier
    fn admit_links(&mut self, page_url: &str, html: &str) {
        // Parse the page URL for resolving relative links
        let base = match Url::parse(page_url) {
            Ok(url) => url,
            Err(_) => return,
        };

        for href in extract_hrefs(html) {
            // Try to resolve to an absolute http(s) URL
            let resolved = match resolve_link(&base, &href) {
                Some(url) => url,
                None => continue,
            };

            // Stay on our host
            if resolved.host_str() != Some(self.config.domain.as_str()) {
                continue;
            }

            // Drop the query and fragment so equivalent links collapse
            // into one frontier entry
            let normalized = normalize(resolved);

            // Honor the prefix filter when one is configured
            if let Some(prefix) = &self.config.path_prefix {
                if !normalized.starts_with(prefix.as_str()) {
                    continue;
                }
            }

            // Never re-queue anything we've seen in either set
            if self.visited.contains(&normalized) || self.frontier.contains(&normalized) {
                continue;
            }

            self.frontier.insert(normalized);
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is HashSet?
//    - A set of unique items (no duplicates)
//    - Very fast lookup: O(1) to check if an item exists
//    - We use one for the frontier and one for visited URLs
//
// 2. Why no queue (VecDeque) like a classic breadth-first crawler?
//    - The crawler makes no promise about visit order
//    - Sets give us the one property we do need: no URL queued twice
//    - The final result is sorted anyway, so order never shows through
//
// 3. Why is there no depth limit?
//    - A URL only enters the frontier if it's in neither set
//    - So the frontier can only grow with never-seen URLs
//    - On a site with finitely many pages the crawl must run out
//    - (A site generating endless unique links would crawl forever;
//      that's inherent to "visit everything")
//
// 4. What does run(mut self) mean?
//    - run consumes the walker; you can't reuse it afterwards
//    - That makes "one walker = one crawl" impossible to get wrong
//
// 5. Why mark visited before fetching?
//    - If fetching fails we still never want to retry the URL
//    - Marking first makes the failure path fall through with no extra
//      bookkeeping
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::collections::HashMap;
    use std::time::Duration;

    // Serves canned pages from a map; anything not in the map fails like
    // a dead server would
    struct MockFetcher {
        pages: HashMap<String, String>,
    }

    impl MockFetcher {
        fn new(pages: &[(&str, &str)]) -> Self {
            Self {
                pages: pages
                    .iter()
                    .map(|(url, html)| (url.to_string(), html.to_string()))
                    .collect(),
            }
        }
    }

    impl Fetcher for MockFetcher {
        async fn fetch(&self, url: &str) -> anyhow::Result<String> {
            match self.pages.get(url) {
                Some(html) => Ok(html.clone()),
                None => Err(anyhow!("connection timed out")),
            }
        }
    }

    fn test_config(start_url: &str, path_prefix: Option<&str>) -> CrawlConfig {
        CrawlConfig::new(
            start_url,
            path_prefix.map(|prefix| prefix.to_string()),
            Duration::ZERO,  // No politeness pause in tests
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_cycle_is_crawled_once_and_offsite_links_ignored() {
        // ex.com/ links to /a and to another site; /a links back to / and
        // on to /b; /b is a dead end
        let fetcher = MockFetcher::new(&[
            (
                "https://ex.com/",
                r#"<a href="/a">A</a> <a href="https://other.com/x">Other</a>"#,
            ),
            ("https://ex.com/a", r#"<a href="/">Home</a> <a href="/b">B</a>"#),
            ("https://ex.com/b", "<p>no links here</p>"),
        ]);

        let walker = FrontierWalker::new(test_config("https://ex.com/", None), fetcher);
        let links = walker.run().await;

        assert_eq!(
            links,
            vec!["https://ex.com/", "https://ex.com/a", "https://ex.com/b"]
        );
    }

    #[tokio::test]
    async fn test_failed_start_url_still_terminates() {
        // Empty page map: the very first fetch fails
        let fetcher = MockFetcher::new(&[]);

        let walker = FrontierWalker::new(test_config("https://ex.com/", None), fetcher);
        let links = walker.run().await;

        // The start URL was visited (and won't be retried), nothing more
        assert_eq!(links, vec!["https://ex.com/"]);
    }

    #[tokio::test]
    async fn test_failed_page_contributes_no_links_but_crawl_continues() {
        // /broken isn't in the map, so fetching it fails; /a still works
        let fetcher = MockFetcher::new(&[
            (
                "https://ex.com/",
                r#"<a href="/broken">Broken</a> <a href="/a">A</a>"#,
            ),
            ("https://ex.com/a", "<p>fine</p>"),
        ]);

        let walker = FrontierWalker::new(test_config("https://ex.com/", None), fetcher);
        let links = walker.run().await;

        assert_eq!(
            links,
            vec!["https://ex.com/", "https://ex.com/a", "https://ex.com/broken"]
        );
    }

    #[tokio::test]
    async fn test_query_and_fragment_are_stripped_before_queueing() {
        let fetcher = MockFetcher::new(&[
            (
                "https://ex.com/",
                r#"<a href="/a?x=1#frag">A with query</a> <a href="/a">Plain a</a>"#,
            ),
            ("https://ex.com/a", "<p>one page, two spellings</p>"),
        ]);

        let walker = FrontierWalker::new(test_config("https://ex.com/", None), fetcher);
        let links = walker.run().await;

        // Both hrefs collapsed into the one normalized URL
        assert_eq!(links, vec!["https://ex.com/", "https://ex.com/a"]);
    }

    #[tokio::test]
    async fn test_lookalike_hosts_are_rejected() {
        // Substring-based domain checks pass all three of these; exact
        // host equality passes none
        let fetcher = MockFetcher::new(&[(
            "https://ex.com/",
            r#"
                <a href="https://ex.com.evil.net/x">Suffix trick</a>
                <a href="https://notex.com/x">Prefix trick</a>
                <a href="https://sub.ex.com/x">Subdomain</a>
            "#,
        )]);

        let walker = FrontierWalker::new(test_config("https://ex.com/", None), fetcher);
        let links = walker.run().await;

        assert_eq!(links, vec!["https://ex.com/"]);
    }

    #[tokio::test]
    async fn test_prefix_filter_limits_the_crawl() {
        let fetcher = MockFetcher::new(&[
            (
                "https://ex.com/docs/",
                r#"<a href="/docs/guide">Guide</a> <a href="/blog/post">Blog</a>"#,
            ),
            ("https://ex.com/docs/guide", "<p>guide</p>"),
        ]);

        let walker = FrontierWalker::new(
            test_config("https://ex.com/docs/", Some("https://ex.com/docs")),
            fetcher,
        );
        let links = walker.run().await;

        // /blog/post is same-host but outside the prefix
        assert_eq!(
            links,
            vec!["https://ex.com/docs/", "https://ex.com/docs/guide"]
        );
    }

    #[tokio::test]
    async fn test_start_url_is_kept_even_outside_the_prefix() {
        // The seed goes in unconditionally; the filter only gates
        // discovered links
        let fetcher = MockFetcher::new(&[(
            "https://ex.com/",
            r#"<a href="/docs/guide">Guide</a> <a href="/blog/post">Blog</a>"#,
        )]);

        let walker = FrontierWalker::new(
            test_config("https://ex.com/", Some("https://ex.com/docs")),
            fetcher,
        );
        let links = walker.run().await;

        assert_eq!(links, vec!["https://ex.com/", "https://ex.com/docs/guide"]);
    }

    #[tokio::test]
    async fn test_result_is_sorted_and_duplicate_free() {
        let fetcher = MockFetcher::new(&[
            (
                "https://ex.com/",
                r#"<a href="/c">C</a> <a href="/a">A</a> <a href="/b">B</a>"#,
            ),
            ("https://ex.com/a", r#"<a href="/c">C again</a>"#),
            ("https://ex.com/b", r#"<a href="/a">A again</a>"#),
            ("https://ex.com/c", "<p>end</p>"),
        ]);

        let walker = FrontierWalker::new(test_config("https://ex.com/", None), fetcher);
        let links = walker.run().await;

        let mut sorted = links.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(links, sorted);
        assert_eq!(links.len(), 4);
    }

    #[tokio::test]
    async fn test_special_scheme_links_are_ignored() {
        let fetcher = MockFetcher::new(&[(
            "https://ex.com/",
            r##"
                <a href="mailto:hi@ex.com">Mail</a>
                <a href="tel:+15551234">Call</a>
                <a href="javascript:void(0)">JS</a>
                <a href="#section">Anchor</a>
            "##,
        )]);

        let walker = FrontierWalker::new(test_config("https://ex.com/", None), fetcher);
        let links = walker.run().await;

        assert_eq!(links, vec!["https://ex.com/"]);
    }
}
