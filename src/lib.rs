// src/lib.rs
// =============================================================================
// scarlet: discover every reachable URL on a website.
//
// The crawl engine lives here so it can be used (and tested) without the
// command-line wrapper in src/main.rs.
//
// Modules:
// - config: validated run settings (seed URL, workers, cap, timeout...)
// - error:  run-level errors and per-URL fetch failures
// - fetch:  download a page and extract its links
// - crawl:  domain scoping, frontier, stats and the worker pool
// - report: progress events, final summary and the JSON report file
// - logger: env_logger setup for the binary
// =============================================================================

pub mod config;
pub mod crawl;
pub mod error;
pub mod fetch;
pub mod logger;
pub mod report;

pub use config::CrawlConfig;
pub use crawl::{CrawlOutcome, Crawler};
pub use error::{CrawlError, FetchFailure};
