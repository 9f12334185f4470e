// src/config.rs
// =============================================================================
// Run configuration for a crawl.
//
// The CLI layer (src/cli.rs) deals with raw strings and flags. This module
// turns them into a validated CrawlConfig that the crawl engine can trust:
// - the seed URL is parsed, checked for an http(s) scheme and a host,
//   and has its #fragment removed
// - the worker count is at least 1
// - the timeout is a real Duration
// =============================================================================

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::error::CrawlError;

/// Default number of concurrent workers.
pub const DEFAULT_WORKERS: usize = 10;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Everything the crawl engine needs to know about one run.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Where the crawl starts; also the reference for domain scoping.
    pub seed: Url,
    /// Soft cap on the number of processed pages (None = unlimited).
    pub max_urls: Option<usize>,
    /// How many workers pull from the frontier concurrently.
    pub workers: NonZeroUsize,
    /// Per-fetch timeout.
    pub timeout: Duration,
    /// Verify TLS certificates (turned off by --insecure).
    pub verify_tls: bool,
    /// Where to write the JSON report (None = don't write one).
    pub output: Option<PathBuf>,
}

impl CrawlConfig {
    /// Builds a config with default settings for the given seed.
    pub fn new(seed: &str) -> Result<Self, CrawlError> {
        Ok(Self {
            seed: parse_seed(seed)?,
            max_urls: None,
            workers: NonZeroUsize::new(DEFAULT_WORKERS).unwrap_or(NonZeroUsize::MIN),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            verify_tls: true,
            output: None,
        })
    }

    pub fn with_max_urls(mut self, max_urls: Option<usize>) -> Self {
        self.max_urls = max_urls;
        self
    }

    /// Sets the worker count. Zero is bumped to one.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = NonZeroUsize::new(workers).unwrap_or(NonZeroUsize::MIN);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_verify_tls(mut self, verify_tls: bool) -> Self {
        self.verify_tls = verify_tls;
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }
}

/// Parses and validates a seed URL.
///
/// Accepts only absolute http/https URLs with a host. The fragment is
/// stripped so the seed has the same identity as links that point to it.
///
/// Examples:
///   "https://example.com"     -> Ok(https://example.com/)
///   "http://localhost:3000"   -> Ok
///   "www.google.com"          -> Err (no scheme)
///   "ftp://archivo.com"       -> Err (wrong scheme)
pub fn parse_seed(raw: &str) -> Result<Url, CrawlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CrawlError::invalid_seed(raw, "URL is empty"));
    }

    let mut url = Url::parse(trimmed).map_err(|e| {
        CrawlError::invalid_seed(raw, format!("{e}; must include http:// or https://"))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(CrawlError::invalid_seed(
            raw,
            format!("unsupported scheme '{}'; must be http or https", url.scheme()),
        ));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(CrawlError::invalid_seed(raw, "URL has no host")),
    }

    url.set_fragment(None);
    Ok(url)
}

/// Convenience check used by the interactive prompt.
pub fn is_valid_seed(raw: &str) -> bool {
    parse_seed(raw).is_ok()
}
