// src/fetch/mod.rs
// =============================================================================
// This module handles downloading pages.
//
// The crawler doesn't talk to reqwest directly. Instead it goes through the
// Fetcher trait defined here, which has exactly one implementation for real
// runs (HttpFetcher) and canned-page implementations in tests. That keeps
// the crawl logic testable without a network.
//
// Rust concepts:
// - Traits: Define a capability (here: "can fetch a URL") that multiple
//   types can implement
// - async fn in traits: Since Rust 1.75 traits can have async methods
//   directly, no extra crate needed
// =============================================================================

mod http;

pub use http::HttpFetcher;

use anyhow::Result;

// The fetch capability the crawler depends on
//
// Contract:
// - Ok(body) only for a successful (2xx) response; redirects are followed
//   by the implementation before this is decided
// - Err for everything else: network errors, timeouts, non-success statuses
//
// The crawler treats every Err the same way (warn and move on), so
// implementations don't need to distinguish failure kinds.
//
// The allow is for the auto-trait-bounds lint on public async trait
// methods; we only ever use this trait inside the crate.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    async fn fetch(&self, url: &str) -> Result<String>;
}
