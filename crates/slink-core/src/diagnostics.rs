//! Failure reporting seam shared by slug resolution and page fetching.
//!
//! Both operations absorb remote failures instead of propagating them, but
//! the raw failure must still surface somewhere. They emit exactly one
//! record per absorbed failure through a [`DiagnosticSink`]: the default
//! [`TracingSink`] forwards to the `tracing` error stream, while
//! [`MemorySink`] collects records for tests and embedders that need to
//! observe them.

use std::sync::Mutex;

use crate::Error;

/// Receives one record per absorbed remote failure.
pub trait DiagnosticSink: Send + Sync {
    /// Record a single failure.
    fn record(&self, failure: &Error);
}

/// Logs failures through `tracing` with the error category attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, failure: &Error) {
        tracing::error!(category = failure.category(), "{failure}");
    }
}

/// Collects rendered failures in memory, in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered failures recorded so far.
    #[must_use]
    pub fn records(&self) -> Vec<String> {
        self.records
            .lock()
            .map_or_else(|_| Vec::new(), |records| records.clone())
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&self, failure: &Error) {
        if let Ok(mut records) = self.records.lock() {
            records.push(failure.to_string());
        }
    }
}
