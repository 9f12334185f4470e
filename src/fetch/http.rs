// src/fetch/http.rs
// =============================================================================
// This module fetches one URL and classifies what came back.
//
// Every fetch ends in exactly one of three outcomes:
// - Html(body): a successful response with an HTML content type
// - NonHtml:    a successful response with any other content type
//               (images, PDFs, JSON...). The body is read and thrown away so
//               the pooled connection can be reused.
// - Failure:    404, another non-2xx status, a timeout, or any other error
//
// There are no retries. A failure is final for that URL in this crawl.
//
// Rust concepts:
// - Enums with data: FetchOutcome carries the body or the failure kind
// - Client reuse: one reqwest::Client holds the connection pool for the run
// =============================================================================

use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::config::CrawlConfig;
use crate::error::{CrawlError, FetchFailure};

/// What happened when we fetched a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Successful HTML response, with its body
    Html(String),
    /// Successful response that is not HTML (body discarded)
    NonHtml,
    /// The fetch failed
    Failure(FetchFailure),
}

/// Fetches pages for the crawl, sharing one HTTP connection pool.
///
/// Cloning a Fetcher is cheap: reqwest::Client is reference counted inside.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    timeout: Duration,
}

impl Fetcher {
    /// Builds the HTTP client for a crawl.
    ///
    /// Redirects are followed (reqwest's default policy). Certificate
    /// verification follows `config.verify_tls`.
    pub fn new(config: &CrawlConfig) -> Result<Self, CrawlError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(!config.verify_tls)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    /// Fetches a single URL with the configured timeout.
    ///
    /// Failures are logged here (one line each) and returned as
    /// `FetchOutcome::Failure`; this function never returns an error.
    pub async fn fetch(&self, url: &str) -> FetchOutcome {
        let outcome = self.try_fetch(url).await;
        if let FetchOutcome::Failure(failure) = &outcome {
            warn!("{} - URL: {}", failure, url);
        }
        outcome
    }

    async fn try_fetch(&self, url: &str) -> FetchOutcome {
        let response = match self.client.get(url).timeout(self.timeout).send().await {
            Ok(response) => response,
            Err(e) => return FetchOutcome::Failure(categorize_error(&e)),
        };

        let status = response.status();
        if !status.is_success() {
            // Drain the error page so the connection goes back to the pool
            let _ = response.bytes().await;
            return FetchOutcome::Failure(categorize_status(status));
        }

        let is_html = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.to_ascii_lowercase().contains("text/html"))
            .unwrap_or(false);

        if is_html {
            match response.text().await {
                Ok(body) => FetchOutcome::Html(body),
                Err(e) => FetchOutcome::Failure(categorize_error(&e)),
            }
        } else {
            match response.bytes().await {
                Ok(body) => {
                    debug!("Skipping non-HTML response ({} bytes): {}", body.len(), url);
                    FetchOutcome::NonHtml
                }
                Err(e) => FetchOutcome::Failure(categorize_error(&e)),
            }
        }
    }
}

// Maps a non-2xx status to a failure kind
fn categorize_status(status: StatusCode) -> FetchFailure {
    if status == StatusCode::NOT_FOUND {
        FetchFailure::NotFound
    } else {
        FetchFailure::HttpError(status.as_u16())
    }
}

// Maps a reqwest error to a failure kind
fn categorize_error(error: &reqwest::Error) -> FetchFailure {
    if error.is_timeout() {
        FetchFailure::Timeout
    } else if let Some(status) = error.status() {
        categorize_status(status)
    } else {
        FetchFailure::Other(error.to_string())
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why read the body of a response we don't want?
//    - HTTP/1.1 keep-alive only works if the previous response was read to
//      the end. Dropping it early closes the socket.
//
// 2. Why is the timeout set twice (client and request)?
//    - The client value is the default for any request it makes; the request
//      value makes the per-fetch bound explicit at the call site.
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher_with_timeout(timeout: Duration) -> Fetcher {
        let config = CrawlConfig::new("http://localhost")
            .unwrap()
            .with_timeout(timeout);
        Fetcher::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_html_response_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw("<html><a href=\"/a\">a</a></html>", "text/html; charset=utf-8"),
            )
            .mount(&server)
            .await;

        let fetcher = fetcher_with_timeout(Duration::from_secs(5));
        let outcome = fetcher.fetch(&format!("{}/", server.uri())).await;
        assert_eq!(
            outcome,
            FetchOutcome::Html("<html><a href=\"/a\">a</a></html>".to_string())
        );
    }

    #[tokio::test]
    async fn test_non_html_response_is_discarded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/logo.png"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(vec![0u8; 64], "image/png"))
            .mount(&server)
            .await;

        let fetcher = fetcher_with_timeout(Duration::from_secs(5));
        let outcome = fetcher.fetch(&format!("{}/logo.png", server.uri())).await;
        assert_eq!(outcome, FetchOutcome::NonHtml);
    }

    #[tokio::test]
    async fn test_not_found_is_its_own_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = fetcher_with_timeout(Duration::from_secs(5));
        let outcome = fetcher.fetch(&format!("{}/missing", server.uri())).await;
        assert_eq!(outcome, FetchOutcome::Failure(FetchFailure::NotFound));
    }

    #[tokio::test]
    async fn test_server_error_keeps_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let fetcher = fetcher_with_timeout(Duration::from_secs(5));
        let outcome = fetcher.fetch(&format!("{}/busy", server.uri())).await;
        assert_eq!(outcome, FetchOutcome::Failure(FetchFailure::HttpError(503)));
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw("<html></html>", "text/html")
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let fetcher = fetcher_with_timeout(Duration::from_millis(200));
        let outcome = fetcher.fetch(&format!("{}/slow", server.uri())).await;
        assert_eq!(outcome, FetchOutcome::Failure(FetchFailure::Timeout));
    }

    #[tokio::test]
    async fn test_connection_refused_is_other() {
        // Port 9 (discard) on localhost is essentially never listening
        let fetcher = fetcher_with_timeout(Duration::from_secs(5));
        let outcome = fetcher.fetch("http://127.0.0.1:9/").await;
        assert!(matches!(outcome, FetchOutcome::Failure(FetchFailure::Other(_))));
    }

    #[test]
    fn test_categorize_status() {
        assert_eq!(categorize_status(StatusCode::NOT_FOUND), FetchFailure::NotFound);
        assert_eq!(
            categorize_status(StatusCode::INTERNAL_SERVER_ERROR),
            FetchFailure::HttpError(500)
        );
    }
}
