// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Unlike multi-purpose tools, sitemap-gen does exactly one thing, so there
// are no subcommands, just a flat set of flags, every one with a default,
// so the binary runs with no arguments at all.
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "sitemap-gen",
    version = "0.1.0",
    about = "Crawl a website and write a sitemap XML of every reachable page",
    long_about = "sitemap-gen performs a bounded breadth-first crawl starting from a root URL, \
                  following only same-origin links, and writes the set of discovered pages \
                  as a sitemaps.org urlset document."
)]
pub struct Cli {
    /// The root URL to start crawling from
    ///
    /// Root-relative links found on each page are resolved against the
    /// effective origin of that page (after redirects), not this value.
    #[arg(long, default_value = "https://example.com")]
    pub url: String,

    /// Maximum number of crawl rounds
    ///
    /// Depth counts fetch rounds, not link distance:
    /// 0 = fetch nothing, 1 = fetch only the root page,
    /// 2 = root page + every page it links to, etc.
    #[arg(long, default_value_t = 4)]
    pub max_depth: usize,

    /// Path of the sitemap XML file to write
    #[arg(long, default_value = "urls.xml")]
    pub output: String,

    /// Also print the discovered page list as JSON to stdout
    #[arg(long)]
    pub json: bool,
}
