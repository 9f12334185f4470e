// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Submodules:
// - scope:       is a link on the same site as the seed?
// - frontier:    queue of pending URLs + registry of every URL ever admitted
// - stats:       found / processed / error counters
// - coordinator: the worker pool that ties it all together
//
// Features:
// - Breadth-first crawling starting from a seed URL
// - Stays within the seed's registrable domain (subdomains included)
// - Each URL is fetched at most once
// - Bounded concurrency and an optional soft cap on processed pages
// =============================================================================

mod coordinator;
mod frontier;
mod scope;
mod stats;

pub use coordinator::{CrawlOutcome, Crawler};
pub use scope::{is_other_host, same_domain};
pub use stats::StatsSnapshot;
