// src/fetcher/links.rs
// =============================================================================
// This module extracts hyperlink targets from HTML and decides which ones
// belong in the crawl.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// The filtering rules are intentionally narrow. Only two href shapes survive:
// - root-relative ("/about"): rewritten to origin + href
// - absolute ("http..."): kept verbatim
// Everything else (../x, bare relative paths, #fragments, mailto:,
// javascript:, protocol-relative //host) is silently dropped. No Url::join
// resolution here: a "../about" link has no home in the sitemap.
//
// After rewriting, a same-origin prefix filter throws away links that point
// off-site. No further normalization happens: query strings, fragments and
// trailing slashes are preserved as-is, so "/a" and "/a/" are distinct pages.
// =============================================================================

use scraper::{Html, Selector};

// Extracts in-scope links from one page's HTML
//
// Parameters:
//   html: the page body to parse (borrowed as &str)
//   origin: the effective origin of the page, e.g. "https://example.com"
//           (scheme + host, no trailing slash, no path)
//
// Returns: absolute URL strings, in document order, all starting with origin
pub fn extract_links(html: &str, origin: &str) -> Vec<String> {
    let links = collect_hrefs(html, origin);

    // Same-origin filter: anything that escaped the origin (an absolute
    // link to another host) is dropped here rather than treated as an error
    links
        .into_iter()
        .filter(|link| link.starts_with(origin))
        .collect()
}

// Collects and normalizes every a[href] value in the document
//
// Root-relative targets are prefixed with the origin; absolute http(s)
// targets pass through untouched; all other forms are skipped.
fn collect_hrefs(html: &str, origin: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    // Selector::parse returns Result, so we use .unwrap() which panics on error
    // This is OK here because our selector is a constant and known to be valid
    let selector = Selector::parse("a[href]").unwrap();

    let mut links = Vec::new();
    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            if let Some(link) = normalize_href(href, origin) {
                links.push(link);
            }
        }
    }

    links
}

// Applies the two prefix rules to a single href value
//
// Returns: Some(absolute_url) if the href is root-relative or absolute,
//          None for every other form (dropped, not an error)
//
// Note the "http" prefix check is a plain string test, so it admits both
// "http://" and "https://" in one branch. Protocol-relative "//host" links
// start with '/' and get origin-prefixed into "origin//host", which the
// same-origin filter then accepts.
fn normalize_href(href: &str, origin: &str) -> Option<String> {
    if href.starts_with('/') {
        Some(format!("{}{}", origin, href))
    } else if href.starts_with("http") {
        Some(href.to_string())
    } else {
        None
    }
}
