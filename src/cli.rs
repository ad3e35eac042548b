// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// There are no subcommands here: the tool does one thing, so the arguments
// live directly on the top-level struct. Both positionals are optional
// because the program falls back to interactive prompts when the start URL
// is missing (see main.rs).
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "link-mapper",
    version = "0.1.0",
    about = "Maps every unique same-domain link reachable from a start URL",
    long_about = "link-mapper crawls a website starting from a given URL, staying on the same \
                  host, and writes the sorted list of every unique page it found to \
                  <host>_links.txt. An optional URL prefix narrows the crawl to one section \
                  of the site."
)]
pub struct Cli {
    /// URL to start crawling from (e.g. https://example.com)
    ///
    /// When omitted, the program prompts for it interactively
    pub start_url: Option<String>,

    /// Only follow URLs that start with this prefix
    ///
    /// Example: https://example.com/docs restricts the crawl to the docs
    /// section. The start URL itself is always included.
    pub path_prefix: Option<String>,

    /// Print the crawl report as JSON to stdout as well
    ///
    /// This is an optional flag: --json
    #[arg(long)]
    pub json: bool,

    /// Pause between requests, in milliseconds
    ///
    /// Politeness towards the crawled server. Zero disables the pause.
    #[arg(long, default_value_t = 100)]
    pub delay_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_both_positionals() {
        let cli = Cli::parse_from(["link-mapper", "https://ex.com/", "https://ex.com/docs"]);
        assert_eq!(cli.start_url.as_deref(), Some("https://ex.com/"));
        assert_eq!(cli.path_prefix.as_deref(), Some("https://ex.com/docs"));
        assert!(!cli.json);
        assert_eq!(cli.delay_ms, 100);
    }

    #[test]
    fn test_parse_with_no_arguments() {
        let cli = Cli::parse_from(["link-mapper"]);
        assert_eq!(cli.start_url, None);
        assert_eq!(cli.path_prefix, None);
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["link-mapper", "https://ex.com/", "--json", "--delay-ms", "0"]);
        assert!(cli.json);
        assert_eq!(cli.delay_ms, 0);
    }
}
