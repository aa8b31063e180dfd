//! Wire types exchanged with the shortener API.

use serde::{Deserialize, Serialize};

/// One short-link record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlMapping {
    /// Short identifier the server resolves to the full URL.
    pub slug: String,
    /// Full URL the slug redirects to.
    pub url: String,
}

/// One page of the URL listing endpoint's response.
///
/// `previous` and `next` are part of the wire format but page arithmetic
/// is derived from `count` and the fixed page size instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedUrls {
    /// Total number of records across all pages.
    pub count: u64,
    /// Records on this page.
    pub results: Vec<UrlMapping>,
    /// Link to the previous page, if any.
    #[serde(default)]
    pub previous: Option<String>,
    /// Link to the next page, if any.
    #[serde(default)]
    pub next: Option<String>,
}
