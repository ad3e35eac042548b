// src/crawl/config.rs
// =============================================================================
// This module defines the configuration for a single crawl run.
//
// Everything in CrawlConfig is decided once, before the crawl starts, and
// never changes while it runs:
// - Where to start
// - Which host we're allowed to stay on
// - An optional URL prefix to narrow the crawl further
// - How long to pause between requests
//
// Building the config is also where the only fatal error in the program can
// happen: a start URL that doesn't parse or has no host. Everything after
// this point recovers locally.
//
// Rust concepts:
// - Result<T, E>: Construction can fail, so new() returns Result
// - Option<T>: The prefix filter may or may not be set
// =============================================================================

use anyhow::{anyhow, Result};
use std::time::Duration;
use url::Url;

use crate::extract::host_of;

// How long to wait for each page before giving up on it
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

// Settings for one crawl run
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// The URL the crawl is seeded with, kept exactly as supplied
    pub start_url: String,
    /// The host we restrict the crawl to (taken from the start URL)
    pub domain: String,
    /// Optional filter: only URLs starting with this string are followed
    pub path_prefix: Option<String>,
    /// Pause after each successfully crawled page
    pub delay: Duration,
}

impl CrawlConfig {
    // Validates the start URL and builds the run configuration
    //
    // Parameters:
    //   start_url: where the crawl begins; must be an absolute URL with a host
    //   path_prefix: optional URL prefix filter; an empty string counts as
    //                no filter at all
    //   delay: politeness pause between requests (tests pass Duration::ZERO)
    //
    // Returns: the config, or an error if the start URL is unusable
    //
    // Example:
    //   CrawlConfig::new("https://docs.example.com/guide/", None, delay)
    //   -> domain = "docs.example.com"
    pub fn new(start_url: &str, path_prefix: Option<String>, delay: Duration) -> Result<Self> {
        // Parse and validate the starting URL
        Url::parse(start_url).map_err(|e| anyhow!("Invalid URL '{}': {}", start_url, e))?;

        // Extract the host from the starting URL
        // We'll only crawl pages on this exact host
        let domain = host_of(start_url)
            .ok_or_else(|| anyhow!("URL has no host: {}", start_url))?;

        // An empty prefix would match everything anyway, so treat it the
        // same as no prefix
        let path_prefix = path_prefix.filter(|prefix| !prefix.is_empty());

        Ok(Self {
            start_url: start_url.to_string(),
            domain,
            path_prefix,
            delay,
        })
    }
}
