// src/extract/mod.rs
// =============================================================================
// This module turns fetched HTML into candidate URLs.
//
// Submodules:
// - html: Pulls raw href values out of anchor tags
// - urls: Resolves hrefs to absolute URLs and normalizes them
//
// This file (mod.rs) is the module root - it re-exports the public API that
// the rest of the application uses.
// =============================================================================

mod html;
mod urls;

// Re-export public items from submodules
// This lets users write `extract::extract_hrefs()` instead of
// `extract::html::extract_hrefs()`
pub use html::extract_hrefs;
pub use urls::{host_of, normalize, resolve_link};
