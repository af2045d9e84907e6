// src/crawl/bfs.rs
// =============================================================================
// This module implements the bounded breadth-first traversal.
//
// How it works:
// 1. Start with the root URL as the only entry in the frontier
// 2. Run exactly max_depth rounds
// 3. Each round: swap the frontier for an empty set, fetch every URL in
//    the old frontier (skipping ones already visited), and pour all the
//    links discovered this round into the new frontier
// 4. After max_depth rounds, return everything that was visited
//
// Depth counts fetch ROUNDS, not link distance: the root itself is only
// fetched when max_depth >= 1, and a page discovered in round k gets
// fetched in round k+1 only if k+1 <= max_depth. The loop stops after
// max_depth rounds whether or not the frontier still has URLs in it.
//
// Deduplication happens when a URL is pulled out of the frontier, not when
// it is inserted: many pages may feed the same URL into the next frontier
// (the set collapses those for free), and a URL visited in an earlier round
// is skipped without re-fetching or re-contributing its links.
//
// Fetching is strictly sequential: each GET is awaited to completion before
// the next begins, and a round must fully finish before the next starts.
// Any fetch error anywhere aborts the whole crawl via ?; there is no
// partial result.
// =============================================================================

use anyhow::Result;
use reqwest::Client;
use std::collections::HashSet;

use crate::fetcher;

// Crawls a website breadth-first, bounded by a number of fetch rounds
//
// Parameters:
//   client: shared reqwest client used for every GET
//   root_url: the URL seeding the frontier
//   max_depth: how many rounds to run (0 = fetch nothing at all)
//
// Returns: every distinct URL fetched, in no particular order
//
// The frontier and visited sets live only inside this call frame; nothing
// is shared or retained between invocations.
pub async fn crawl(client: &Client, root_url: &str, max_depth: usize) -> Result<Vec<String>> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut frontier: HashSet<String> = HashSet::new();
    frontier.insert(root_url.to_string());

    for round in 1..=max_depth {
        // The old frontier becomes this round's work list; discoveries go
        // into the fresh one
        let current = std::mem::take(&mut frontier);

        for url in current {
            // insert() returns false if the URL was already visited, in
            // which case its links were collected in an earlier round and
            // are not collected again
            if !visited.insert(url.clone()) {
                continue;
            }

            println!("  Crawling [round {}]: {}", round, url);

            let links = fetcher::discover_links(client, &url).await?;
            frontier.extend(links);
        }
    }

    Ok(visited.into_iter().collect())
}
