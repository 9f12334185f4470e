// src/report/mod.rs
// =============================================================================
// Output of a crawl:
// - events:  live progress lines while the crawl runs
// - results: the JSON report of every URL found
// - summary: the final statistics block
// =============================================================================

mod events;
mod results;
mod summary;

pub use events::{admitted, ConsoleReporter, CrawlEvent, CrawlReporter, SilentReporter};
pub use results::{save_results, CrawlResult};
pub use summary::print_statistics;

#[cfg(test)]
pub(crate) use events::testing;
