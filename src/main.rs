// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Run the bounded BFS crawl from the root URL
// 3. Write the discovered pages out as a sitemap XML file
// 4. Exit with proper code (0 = success, 2 = error)
//
// The crawl itself is strictly sequential: one GET at a time, one round at
// a time. Any fetch failure unwinds to run() and becomes exit code 2 with
// no partial sitemap written.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;      // src/cli.rs - command-line parsing
mod crawl;    // src/crawl/ - bounded BFS traversal
mod fetcher;  // src/fetcher/ - page fetching and link extraction
mod sitemap;  // src/sitemap/ - urlset XML serialization

use cli::Cli;
use clap::Parser;
use serde::Serialize;
use std::path::Path;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// What --json prints: the crawl parameters plus every discovered page
#[derive(Serialize)]
struct CrawlReport<'a> {
    root_url: &'a str,
    max_depth: usize,
    pages: &'a [String],
}

// The main application logic
// Returns:
//   Ok(0) = sitemap written
//   Err = crawl or write failed (becomes exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();

    println!("🔍 Crawling: {}", cli.url);
    println!("📊 Max crawl depth: {}", cli.max_depth);

    // One client for the whole crawl. Deliberately no timeout: the crawl
    // blocks for as long as the slowest server makes it wait
    let client = reqwest::Client::builder().build()?;

    let mut pages = crawl::crawl(&client, &cli.url, cli.max_depth).await?;

    // The crawl returns set order; sort so urls.xml is stable run-to-run
    pages.sort();

    println!("📄 Discovered {} page(s)", pages.len());

    if cli.json {
        let report = CrawlReport {
            root_url: &cli.url,
            max_depth: cli.max_depth,
            pages: &pages,
        };
        let json_output = serde_json::to_string_pretty(&report)?;
        println!("{}", json_output);
    }

    sitemap::write_sitemap_file(Path::new(&cli.output), &pages)?;
    println!("✅ Sitemap written to {}", cli.output);

    Ok(0)
}
