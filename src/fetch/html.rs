// src/fetch/html.rs
// =============================================================================
// This module extracts links from fetched HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// We also use the `url` crate to:
// - Resolve relative hrefs against the page they appear on
// - Drop the #fragment so /docs and /docs#intro are the same URL
//
// No filtering by domain happens here. That is the job of crawl::scope and
// the frontier's visited registry.
// =============================================================================

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

// Extracts every link on a page as an absolute, fragment-free URL
//
// Parameters:
//   page_url: the URL the HTML was fetched from (relative hrefs resolve against it)
//   html: the HTML content to parse
//
// Returns: the set of distinct URLs found (duplicates on the page collapse)
//
// Example:
//   page_url = "https://example.com/blog/"
//   html = "<a href='post#comments'>Post</a>"
//   result = {"https://example.com/blog/post"}
pub fn extract_links(page_url: &Url, html: &str) -> HashSet<String> {
    let document = Html::parse_document(html);

    // The selector is a constant, so parsing it can only fail on a typo here
    let selector = Selector::parse("a[href]").expect("valid anchor selector");

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_link(page_url, href))
        .collect()
}

// Resolves one href against the page URL and strips its fragment
//
// Returns None for empty hrefs and for hrefs the url crate can't resolve
fn resolve_link(page_url: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    let mut url = page_url.join(href).ok()?;
    url.set_fragment(None);
    Some(url.into())
}
