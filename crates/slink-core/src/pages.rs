//! Cached, page-at-a-time view of the shortener's URL listing.
//!
//! [`PageCache`] owns the state an interface needs to page through the
//! listing: the pages fetched so far, the page being displayed, the total
//! page count derived from the server's record count, and the in-flight
//! and failure flags. Display layers read the accessors and follow one
//! policy: a set error wins, an in-flight fetch shows an indicator, and
//! otherwise the current page's entries are rendered (empty when nothing
//! is cached for it).

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::api::ApiClient;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::types::UrlMapping;

/// Records per listing page, fixed by the server's paginator.
pub const URLS_PER_PAGE: u64 = 50;

/// Message surfaced through [`PageCache::error`] when a page fetch fails.
pub const PAGE_FETCH_ERROR: &str = "Failed to fetch your URLs due to an unexpected error.";

/// Pages fetched so far plus the position being displayed.
///
/// A page fetched once is kept for the lifetime of the value and never
/// re-fetched; nothing invalidates it, and the backing collection is
/// append-mostly, so a revisit is answered from memory. The map grows
/// with the number of distinct pages visited, which short sessions keep
/// small.
///
/// Every operation takes `&mut self`, so two fetches for the same page
/// cannot overlap and no request de-duplication is needed.
pub struct PageCache {
    api: ApiClient,
    sink: Arc<dyn DiagnosticSink>,
    pages: HashMap<u32, Vec<UrlMapping>>,
    current_page: u32,
    total_pages: u32,
    loading: bool,
    error: Option<String>,
}

impl PageCache {
    /// Creates a cache and loads the first page.
    ///
    /// Absorbed fetch failures are reported through `tracing`.
    pub async fn new(api: ApiClient) -> Self {
        Self::with_sink(api, Arc::new(TracingSink)).await
    }

    /// Creates a cache with a custom diagnostic sink and loads the first page.
    pub async fn with_sink(api: ApiClient, sink: Arc<dyn DiagnosticSink>) -> Self {
        let mut cache = Self {
            api,
            sink,
            pages: HashMap::new(),
            current_page: 1,
            total_pages: 1,
            loading: false,
            error: None,
        };
        cache.go_to(1).await;
        cache
    }

    /// Moves the view to `page`.
    ///
    /// Pages outside `1..=total_pages` are ignored without touching state
    /// or the network. A cached page becomes current immediately. An
    /// uncached page is fetched; on success the total-page count is
    /// recomputed from the server's record count, the results are cached,
    /// the view moves, and any earlier failure message is cleared. On
    /// failure the raw error goes to the diagnostic sink once,
    /// [`PAGE_FETCH_ERROR`] becomes readable through [`error`](Self::error),
    /// and the position and cache stay as they were.
    pub async fn go_to(&mut self, page: u32) {
        if page < 1 || page > self.total_pages {
            debug!("Ignoring out-of-range page {page} (1-{})", self.total_pages);
            return;
        }
        if self.pages.contains_key(&page) {
            self.current_page = page;
            return;
        }

        self.loading = true;
        let outcome = self.api.list_page(page).await;
        self.loading = false;

        match outcome {
            Ok(listing) => {
                self.total_pages = total_pages_for(listing.count);
                self.pages.insert(page, listing.results);
                self.current_page = page;
                self.error = None;
                debug!("Cached page {page} of {}", self.total_pages);
            },
            Err(failure) => {
                self.sink.record(&failure);
                self.error = Some(PAGE_FETCH_ERROR.to_string());
            },
        }
    }

    /// Moves to the page after the current one, if there is one.
    pub async fn next(&mut self) {
        self.go_to(self.current_page.saturating_add(1)).await;
    }

    /// Moves to the page before the current one, if there is one.
    pub async fn prev(&mut self) {
        self.go_to(self.current_page.saturating_sub(1)).await;
    }

    /// Entries of the page being displayed, empty when that page has no
    /// cached content.
    #[must_use]
    pub fn current_entries(&self) -> &[UrlMapping] {
        self.pages
            .get(&self.current_page)
            .map_or(&[], Vec::as_slice)
    }

    /// Page currently displayed, 1-based.
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Number of pages the collection spans, never below 1.
    #[must_use]
    pub const fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// True while a fetch for the page about to become current is running.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// The user-facing failure message set by the last settled fetch, if
    /// that fetch failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Pages needed for `count` records, clamped to at least one so an empty
/// collection still has a displayable page 1.
fn total_pages_for(count: u64) -> u32 {
    let pages = count.div_ceil(URLS_PER_PAGE).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}
