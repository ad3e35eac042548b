// src/report/mod.rs
// =============================================================================
// This module handles reporting crawl results.
//
// Currently implements:
// - Writing the visited-URL list to <host>_links.txt
// - A serializable summary for --json output
// =============================================================================

mod file;

// Re-export the reporting API
pub use file::{output_filename, write_links, CrawlReport};
