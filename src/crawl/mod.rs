// src/crawl/mod.rs
// =============================================================================
// This module drives the bounded breadth-first traversal of a website.
//
// The traverser owns the frontier and visited sets for the duration of one
// crawl call and terminates after a fixed number of fetch rounds, whatever
// is still left in the frontier. All I/O goes through the fetcher module.
// =============================================================================

mod bfs;

// Re-export the crawl entry point
pub use bfs::crawl;
