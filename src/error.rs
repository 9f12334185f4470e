// src/error.rs
// =============================================================================
// Error types for the crawler.
//
// Two families:
// - CrawlError: things that go wrong for the run as a whole (bad seed URL,
//   HTTP client setup, writing the report file)
// - FetchFailure: why a single URL could not be fetched. These never abort
//   the crawl; they are counted and logged, and the workers move on.
//
// We use the `thiserror` crate to derive Display and Error for our enums.
// =============================================================================

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a crawl (or part of the surrounding program).
#[derive(Error, Debug)]
pub enum CrawlError {
    /// The seed URL was missing a scheme or host, or did not parse at all.
    #[error("invalid seed URL '{url}': {reason}")]
    InvalidSeedUrl { url: String, reason: String },

    /// The shared HTTP client could not be built (e.g. TLS backend failure).
    #[error("HTTP client initialization error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// The JSON report could not be written to disk.
    #[error("could not write report to {}: {source}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report could not be encoded as JSON.
    #[error("could not encode report: {0}")]
    ReportEncode(#[from] serde_json::Error),

    /// A worker task panicked or was cancelled.
    #[error("crawl worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),

    /// Reading the seed URL from the terminal failed (stdin closed, I/O error).
    #[error("could not read seed URL: {0}")]
    Prompt(String),
}

impl CrawlError {
    pub fn invalid_seed(url: &str, reason: impl Into<String>) -> Self {
        CrawlError::InvalidSeedUrl {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}

/// Why fetching one URL failed.
///
/// `NotFound` is split out from the other HTTP statuses because it is by far
/// the most common failure when crawling a site and gets its own log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchFailure {
    NotFound,
    HttpError(u16),
    Timeout,
    Other(String),
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::NotFound => write!(f, "Error 404: Not Found"),
            FetchFailure::HttpError(status) => write!(f, "HTTP Error: {}", status),
            FetchFailure::Timeout => write!(f, "Timeout"),
            FetchFailure::Other(message) => write!(f, "Error fetching URL: {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failure_display() {
        assert_eq!(FetchFailure::NotFound.to_string(), "Error 404: Not Found");
        assert_eq!(FetchFailure::HttpError(503).to_string(), "HTTP Error: 503");
        assert_eq!(FetchFailure::Timeout.to_string(), "Timeout");
        assert_eq!(
            FetchFailure::Other("connection refused".to_string()).to_string(),
            "Error fetching URL: connection refused"
        );
    }

    #[test]
    fn test_invalid_seed_message() {
        let err = CrawlError::invalid_seed("not-a-url", "missing scheme");
        assert_eq!(
            err.to_string(),
            "invalid seed URL 'not-a-url': missing scheme"
        );
    }
}
