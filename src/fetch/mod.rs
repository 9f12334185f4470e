// src/fetch/mod.rs
// =============================================================================
// Everything that touches a single page:
// - http: fetch a URL and classify the result (Html / NonHtml / Failure)
// - html: pull the links out of an HTML body
// =============================================================================

mod html;
mod http;

pub use html::extract_links;
pub use http::{FetchOutcome, Fetcher};
