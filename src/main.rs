// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap (or prompt interactively)
// 2. Validate the start URL and build the crawl configuration
// 3. Run the frontier walker to completion
// 4. Write the results to <host>_links.txt and print a summary
// 5. Exit with proper code (0 = success, 2 = error)
//
// Rust concepts used:
// - async/await: The crawl makes network requests
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching on optional CLI arguments
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod crawl;         // src/crawl/ - frontier walker and crawl config
mod extract;       // src/extract/ - link extraction and URL normalization
mod fetch;         // src/fetch/ - HTTP fetching
mod report;        // src/report/ - file and JSON output

// Import items we need from our modules
use cli::Cli;
use clap::Parser;  // Parser trait enables the parse() method
use crawl::{CrawlConfig, FrontierWalker, REQUEST_TIMEOUT};
use fetch::HttpFetcher;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;
use dialoguer::Input;
use std::path::Path;
use std::time::Duration;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = crawl finished and results were written
//   Ok(2) = start URL was rejected
//   Err = unexpected error (also exits with 2)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Take the targets from the arguments, or ask for them interactively
    // when the start URL wasn't given
    let (start_url, path_prefix) = match cli.start_url {
        Some(url) => (url, cli.path_prefix),
        None => prompt_for_targets()?,
    };

    // Reject anything that isn't an http(s) URL up front, before any
    // network traffic or file output happens
    if !start_url.starts_with("http") {
        eprintln!("Error: please provide a valid URL (e.g. 'https://example.com').");
        return Ok(2);
    }

    // Build the immutable run configuration
    // This validates the URL properly and extracts the host; a URL that
    // fails here is the one fatal error of the whole program
    let config = CrawlConfig::new(&start_url, path_prefix, Duration::from_millis(cli.delay_ms))?;
    let domain = config.domain.clone();

    println!("🔍 Starting crawl at: {}", config.start_url);
    println!("🌐 Restricting to domain: {}", domain);
    if let Some(prefix) = &config.path_prefix {
        println!("📁 Restricting to prefix: {}", prefix);
    }
    println!();

    // Run the crawl to completion
    // Per-page failures are handled (and warned about) inside the walker;
    // nothing stops the crawl once it starts
    let fetcher = HttpFetcher::new(REQUEST_TIMEOUT)?;
    let walker = FrontierWalker::new(config, fetcher);
    let links = walker.run().await;

    println!("\n✅ Crawl complete!");

    // Write the primary artifact: one URL per line, named after the host
    let output_filename = report::output_filename(&domain);
    report::write_links(Path::new(&output_filename), &links)?;

    // Optionally print the machine-readable report as well
    if cli.json {
        let crawl_report = report::CrawlReport::new(&start_url, &domain, &links);
        println!("{}", serde_json::to_string_pretty(&crawl_report)?);
    }

    println!("📊 Found {} unique link(s).", links.len());
    println!("💾 Results saved to: {}", output_filename);

    Ok(0)
}

// Asks the user for the crawl targets when none were passed as arguments
//
// Returns: (start_url, optional path prefix)
//
// An empty answer to the prefix question means "no filter", the same as
// leaving the positional argument off
fn prompt_for_targets() -> Result<(String, Option<String>)> {
    let start_url: String = Input::new()
        .with_prompt("Please enter the root URL to start crawling")
        .interact_text()?;

    let prefix: String = Input::new()
        .with_prompt("URL prefix filter (leave empty for none)")
        .allow_empty(true)
        .interact_text()?;

    let path_prefix = if prefix.is_empty() { None } else { Some(prefix) };

    Ok((start_url, path_prefix))
}
