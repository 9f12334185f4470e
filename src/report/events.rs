// src/report/events.rs
// =============================================================================
// Progress reporting during a crawl.
//
// The crawl engine never prints anything itself. It hands events to a
// CrawlReporter, which decides what to do with them:
// - ConsoleReporter prints one colored line per event (the normal CLI)
// - tests plug in a reporter that just records events in memory
// =============================================================================

use colored::Colorize;
use url::Url;

use crate::crawl::is_other_host;
use crate::error::FetchFailure;

/// Something that happened to one URL during the crawl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlEvent {
    /// A new in-domain URL entered the frontier.
    Admitted { url: String, other_host: bool },
    /// Fetching a URL failed.
    Failed { url: String, failure: FetchFailure },
}

/// Receives crawl events. Implementations must be shareable across workers.
pub trait CrawlReporter: Send + Sync {
    fn record(&self, event: CrawlEvent);
}

/// Builds an `Admitted` event, flagging URLs whose host differs from the seed's.
pub fn admitted(seed: &Url, url: &str) -> CrawlEvent {
    let other_host = Url::parse(url)
        .map(|parsed| is_other_host(seed, &parsed))
        .unwrap_or(false);
    CrawlEvent::Admitted {
        url: url.to_string(),
        other_host,
    }
}

/// Prints events to stdout.
///
/// Admitted URLs are blue when they live on another host of the same site
/// (a subdomain), yellow otherwise. Failed URLs are red.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl CrawlReporter for ConsoleReporter {
    fn record(&self, event: CrawlEvent) {
        match event {
            CrawlEvent::Admitted { url, other_host: true } => println!("{}", url.blue()),
            CrawlEvent::Admitted { url, other_host: false } => println!("{}", url.yellow()),
            CrawlEvent::Failed { url, .. } => println!("{}", url.red()),
        }
    }
}

/// Reporter that discards everything (useful for library-style callers).
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl CrawlReporter for SilentReporter {
    fn record(&self, _event: CrawlEvent) {}
}
