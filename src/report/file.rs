// src/report/file.rs
// =============================================================================
// This module writes crawl results out.
//
// Two output shapes:
// - A plain text file, one URL per line, named after the crawled host
//   (e.g. docs.example.com_links.txt) - the primary artifact of a run
// - A CrawlReport struct that serializes to JSON for --json output
//
// Rust concepts:
// - BufWriter: Buffers small writes so we don't hit the disk per line
// - #[derive(Serialize)]: serde generates the JSON conversion for us
// =============================================================================

use anyhow::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// Summary of a finished crawl, for JSON output
#[derive(Debug, Serialize)]
pub struct CrawlReport {
    /// Where the crawl started
    pub start_url: String,
    /// The host the crawl was restricted to
    pub domain: String,
    /// How many unique URLs were visited
    pub total: usize,
    /// Every visited URL, sorted
    pub links: Vec<String>,
}

impl CrawlReport {
    pub fn new(start_url: &str, domain: &str, links: &[String]) -> Self {
        Self {
            start_url: start_url.to_string(),
            domain: domain.to_string(),
            total: links.len(),
            links: links.to_vec(),
        }
    }
}

// Builds the output filename for a crawled host
//
// Example: "docs.example.com" -> "docs.example.com_links.txt"
pub fn output_filename(domain: &str) -> String {
    format!("{}_links.txt", domain)
}

// Writes the collected links to a file, one per line
//
// Parameters:
//   path: where to write
//   links: the sorted URL list from the walker
pub fn write_links(path: &Path, links: &[String]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for link in links {
        writeln!(writer, "{}", link)?;
    }

    // BufWriter flushes on drop too, but flushing explicitly surfaces
    // write errors here instead of losing them
    writer.flush()?;
    Ok(())
}
