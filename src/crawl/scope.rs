// src/crawl/scope.rs
// =============================================================================
// Decides whether a discovered link belongs to the site we are crawling.
//
// The rule is a "registrable domain" heuristic: two hosts are the same site
// when their last two dot-separated labels match. So www.example.com,
// api.example.com and example.com all count as one site.
//
// Special cases:
// - A host with a single label (like `localhost`, or an IPv6 literal such
//   as `[::1]`) is compared exactly
//
// Known limitations:
// - multi-label public suffixes are not recognised, so foo.co.uk and
//   bar.co.uk are treated as the same site
// - IPv4 addresses go through the same rule, so 192.168.0.1 and 10.0.0.1
//   (both ending in "0.1") count as the same site
// =============================================================================

use url::Url;

/// Returns true if `candidate` is on the same site as `base`.
///
/// Both arguments are raw strings; anything that fails to parse or has no
/// host yields `false`.
pub fn same_domain(base: &str, candidate: &str) -> bool {
    match (Url::parse(base), Url::parse(candidate)) {
        (Ok(base), Ok(candidate)) => same_domain_url(&base, &candidate),
        _ => false,
    }
}

/// Same check as [`same_domain`] for already-parsed URLs.
pub fn same_domain_url(base: &Url, candidate: &Url) -> bool {
    let (base_host, candidate_host) = match (base.host_str(), candidate.host_str()) {
        (Some(b), Some(c)) => (b, c),
        _ => return false,
    };

    let base_labels: Vec<&str> = base_host.split('.').collect();
    let candidate_labels: Vec<&str> = candidate_host.split('.').collect();

    if base_labels.len() < 2 || candidate_labels.len() < 2 {
        return base_host == candidate_host;
    }

    base_labels[base_labels.len() - 2..] == candidate_labels[candidate_labels.len() - 2..]
}

/// True when the candidate's host differs from the base host exactly
/// (used to colour subdomain links differently in the progress output).
pub fn is_other_host(base: &Url, candidate: &Url) -> bool {
    base.host_str() != candidate.host_str()
}
