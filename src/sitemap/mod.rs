// src/sitemap/mod.rs
// =============================================================================
// This module turns the crawl result into a sitemaps.org urlset document.
//
// Output shape:
//   <?xml version="1.0" encoding="UTF-8"?>
//   <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//     <url>
//       <loc>https://example.com/page</loc>
//     </url>
//     ...
//   </urlset>
//
// We use quick-xml's Writer, which handles indentation and escapes text
// content for us (an '&' in a query string becomes '&amp;'). No per-URL
// metadata (lastmod, priority) is tracked; location is all we know.
// =============================================================================

use anyhow::{Context, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fs;
use std::path::Path;

const SITEMAP_XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// Renders the page list as an indented urlset document
//
// Parameters:
//   pages: absolute page URLs, one <url><loc> entry each, in given order
//
// Returns: the complete XML document as a String, ending in a newline
pub fn render_sitemap(pages: &[String]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_XMLNS));
    writer.write_event(Event::Start(urlset))?;

    for page in pages {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        writer.write_event(Event::Start(BytesStart::new("loc")))?;
        writer.write_event(Event::Text(BytesText::new(page)))?;
        writer.write_event(Event::End(BytesEnd::new("loc")))?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    let mut xml = String::from_utf8(writer.into_inner())
        .context("sitemap XML was not valid UTF-8")?;
    xml.push('\n');
    Ok(xml)
}

// Renders and writes the sitemap to the given path in one shot
pub fn write_sitemap_file(path: &Path, pages: &[String]) -> Result<()> {
    let xml = render_sitemap(pages)?;
    fs::write(path, xml).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
