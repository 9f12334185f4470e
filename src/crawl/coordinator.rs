// src/crawl/coordinator.rs
// =============================================================================
// This module runs the crawl: a fixed pool of workers draining the frontier.
//
// How it works:
// 1. The frontier starts with just the seed URL
// 2. N workers are spawned; each one loops:
//    a. stop if the (soft) processing cap has been reached
//    b. pop a URL; if the frontier is empty, stop when nobody else is
//       fetching, otherwise wait until the frontier changes
//    c. fetch it; for HTML pages, extract links, keep the in-domain ones and
//       try to admit each into the frontier
//    d. count it as processed, then yield so sibling workers get a turn
// 3. When every worker has stopped, the visited registry becomes the result
//
// The pool size IS the concurrency limit: at most N fetches are in flight.
//
// The cap is soft. Workers read `processed` without coordinating with each
// other, so a few extra pages (up to N - 1) may be processed past the cap.
//
// Rust concepts:
// - Arc<T>: shared ownership of the session across spawned tasks
// - tokio::spawn: runs each worker as its own task
// - trait objects: Arc<dyn CrawlReporter> lets callers choose the output
// =============================================================================

use log::{debug, info};
use std::sync::Arc;
use std::time::Instant;
use url::Url;

use super::frontier::Frontier;
use super::scope::same_domain_url;
use super::stats::{CrawlStats, StatsSnapshot};
use crate::config::CrawlConfig;
use crate::error::CrawlError;
use crate::fetch::{extract_links, FetchOutcome, Fetcher};
use crate::report::{admitted, ConsoleReporter, CrawlEvent, CrawlReporter, CrawlResult};

/// Where a crawl is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlPhase {
    /// URLs are waiting in the frontier and the cap is not reached
    Running,
    /// No more URLs will be started, but some fetches are still in flight
    Draining,
    /// Nothing queued (or cap reached) and nothing in flight
    Done,
}

/// Everything a finished crawl produced.
#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    pub stats: StatsSnapshot,
    pub result: CrawlResult,
}

/// Entry point for running a crawl.
pub struct Crawler {
    config: CrawlConfig,
    reporter: Arc<dyn CrawlReporter>,
}

impl Crawler {
    /// A crawler that reports progress to the console.
    pub fn new(config: CrawlConfig) -> Self {
        Self {
            config,
            reporter: Arc::new(ConsoleReporter),
        }
    }

    /// Replaces the progress reporter.
    pub fn with_reporter(mut self, reporter: Arc<dyn CrawlReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Runs the crawl to completion.
    ///
    /// Fetch failures never end up here; they are counted in the stats.
    /// The only errors are a failure to build the HTTP client and a
    /// worker task dying.
    pub async fn run(&self) -> Result<CrawlOutcome, CrawlError> {
        let started = Instant::now();
        let session = Arc::new(CrawlSession::new(&self.config, Arc::clone(&self.reporter))?);

        info!("Crawling {} with {} worker(s)", self.config.seed, self.config.workers);

        let workers = (0..self.config.workers.get())
            .map(|id| tokio::spawn(worker(id, Arc::clone(&session))));
        futures::future::try_join_all(workers).await?;

        let stats = session.stats.snapshot(started.elapsed());
        let result = CrawlResult::from_visited(session.frontier.visited_snapshot());
        debug!("Crawl finished in phase {:?}", session.phase());

        // Dropping the session here releases the HTTP connection pool
        drop(session);

        Ok(CrawlOutcome { stats, result })
    }
}

// State shared by all workers of one crawl
struct CrawlSession {
    seed: Url,
    max_urls: Option<usize>,
    frontier: Frontier,
    stats: CrawlStats,
    fetcher: Fetcher,
    reporter: Arc<dyn CrawlReporter>,
}

impl CrawlSession {
    fn new(config: &CrawlConfig, reporter: Arc<dyn CrawlReporter>) -> Result<Self, CrawlError> {
        Ok(Self {
            seed: config.seed.clone(),
            max_urls: config.max_urls,
            frontier: Frontier::with_seed(config.seed.as_str()),
            stats: CrawlStats::new(),
            fetcher: Fetcher::new(config)?,
            reporter,
        })
    }

    fn cap_reached(&self) -> bool {
        self.max_urls
            .map(|cap| self.stats.processed() >= cap)
            .unwrap_or(false)
    }

    fn phase(&self) -> CrawlPhase {
        let stopping = self.frontier.pending() == 0 || self.cap_reached();
        match (stopping, self.frontier.in_flight()) {
            (false, _) => CrawlPhase::Running,
            (true, 0) => CrawlPhase::Done,
            (true, _) => CrawlPhase::Draining,
        }
    }

    // Fetches one URL and feeds any new in-domain links back into the frontier
    async fn process(&self, url: &str) {
        match self.fetcher.fetch(url).await {
            FetchOutcome::Html(body) => self.admit_links(url, &body),
            FetchOutcome::NonHtml => {}
            FetchOutcome::Failure(failure) => {
                self.stats.record_error();
                self.reporter.record(CrawlEvent::Failed {
                    url: url.to_string(),
                    failure,
                });
            }
        }
    }

    fn admit_links(&self, page: &str, body: &str) {
        let page_url = match Url::parse(page) {
            Ok(url) => url,
            Err(e) => {
                debug!("Cannot resolve links on {}: {}", page, e);
                return;
            }
        };

        // Sorted so admission order doesn't depend on HashSet iteration order
        let mut links: Vec<String> = extract_links(&page_url, body).into_iter().collect();
        links.sort();

        for link in links {
            let in_scope = Url::parse(&link)
                .map(|candidate| same_domain_url(&self.seed, &candidate))
                .unwrap_or(false);
            if !in_scope {
                continue;
            }

            if self.frontier.try_admit(link.as_str()) {
                self.stats.record_found();
                self.reporter.record(admitted(&self.seed, &link));
            }
        }
    }
}

async fn worker(id: usize, session: Arc<CrawlSession>) {
    debug!("Worker {} started", id);

    loop {
        if session.cap_reached() {
            debug!("Worker {} stopping: processing cap reached", id);
            break;
        }

        // Subscribe before looking at the frontier so a change that lands
        // between the check and the wait still wakes us
        let changed = session.frontier.changed();
        tokio::pin!(changed);
        changed.as_mut().enable();

        match session.frontier.pop_next() {
            Some(url) => {
                session.process(&url).await;
                session.stats.record_processed();
                session.frontier.complete();
            }
            None if session.frontier.is_drained() => break,
            None => {
                changed.await;
                continue;
            }
        }

        tokio::task::yield_now().await;
    }

    debug!("Worker {} finished ({:?})", id, session.phase());
}
