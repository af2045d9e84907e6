// src/fetcher/mod.rs
// =============================================================================
// This module is the fetcher/extractor: the only part of the crawler that
// touches the network or parses markup.
//
// Submodules:
// - http: performs one GET per page and derives the effective origin
// - links: extracts a[href] targets and applies the same-origin link rules
//
// This file (mod.rs) is the module root - it composes the two halves into
// the one operation the traverser consumes: URL in, in-scope links out.
// =============================================================================

mod http;
mod links;

// Re-export the pieces that tests and callers use directly
pub use http::fetch_page;
pub use links::extract_links;

use anyhow::Result;
use reqwest::Client;

// Fetches one page and returns the in-scope links found on it
//
// Exactly one network round trip. Any fetch failure propagates up and
// aborts the crawl; link filtering never fails, it only drops entries.
pub async fn discover_links(client: &Client, url: &str) -> Result<Vec<String>> {
    let page = fetch_page(client, url).await?;
    Ok(extract_links(&page.body, &page.origin))
}
