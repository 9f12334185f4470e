// src/report/results.rs
// =============================================================================
// The crawl report: a snapshot of every URL the crawl admitted, written to
// disk as pretty-printed JSON.
//
// Format:
//   {
//     "timestamp": "2024-05-01T12:34:56.789+02:00",
//     "total_urls": 3,
//     "urls": ["https://example.com/", "https://example.com/a", ...]
//   }
//
// The URLs are sorted so two runs over the same site diff cleanly.
// =============================================================================

use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::error::CrawlError;

/// Immutable result of a finished crawl.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrawlResult {
    /// When the snapshot was taken (ISO-8601 with offset)
    pub timestamp: DateTime<Local>,
    /// Number of URLs in `urls`
    pub total_urls: usize,
    /// Every admitted URL, sorted ascending
    pub urls: Vec<String>,
}

impl CrawlResult {
    /// Builds a result from the visited registry, stamped with the current time.
    pub fn from_visited(visited: impl IntoIterator<Item = String>) -> Self {
        let mut urls: Vec<String> = visited.into_iter().collect();
        urls.sort();
        urls.dedup();

        Self {
            timestamp: Local::now(),
            total_urls: urls.len(),
            urls,
        }
    }
}

/// Writes the result as JSON to `path`.
///
/// A failure here is returned to the caller to report; the in-memory
/// result is untouched either way.
pub fn save_results(result: &CrawlResult, path: &Path) -> Result<(), CrawlError> {
    let json = serde_json::to_string_pretty(result)?;
    fs::write(path, json).map_err(|source| CrawlError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })
}
