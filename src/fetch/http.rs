// src/fetch/http.rs
// =============================================================================
// This module implements the Fetcher trait over real HTTP.
//
// Key behavior:
// - One reqwest Client, built once and reused (connection pooling)
// - Fixed per-request timeout so one dead server can't hang the crawl
// - Redirects are followed (up to a limit) before the status is judged
// - Any non-success status becomes an error, like raise_for_status()
//
// Rust concepts:
// - async/await: For network I/O
// - Result<T, E>: For error handling with the ? operator
// =============================================================================

use anyhow::{anyhow, Result};
use reqwest::Client;
use std::time::Duration;

use super::Fetcher;

// Fetches pages over HTTP using reqwest
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the fetcher with its HTTP client
    //
    // Parameters:
    //   timeout: how long to wait for each request before giving up
    //
    // The client is created once here; cloning requests off it later is
    // cheap because reqwest pools connections internally.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))  // Follow up to 5 redirects
            .build()?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    // Fetches a web page and returns its HTML content
    //
    // HTTP status codes:
    // - 200-299: Success, we return the body
    // - 300-399: Followed automatically by the client
    // - Anything else: Error (the page stays visited but yields no links)
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP {}", response.status()));
        }

        let html = response.text().await?;
        Ok(html)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a timeout at all?
//    - Without one, a single unresponsive server blocks the whole crawl
//    - reqwest's timeout covers the full request, from connect to body
//
// 2. What is redirect::Policy::limited(5)?
//    - Follows up to 5 redirects, then errors
//    - Protects against redirect loops (a -> b -> a -> ...)
//
// 3. Why does a 404 become an Err instead of an Ok with a flag?
//    - The caller only cares about one question: "did we get HTML?"
//    - Collapsing every failure into Err keeps the crawl loop to a single
//      match with two arms
// -----------------------------------------------------------------------------
