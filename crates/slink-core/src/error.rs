//! Error types and handling for slink-core operations.
//!
//! Every fallible operation in this crate returns [`Result<T>`] with a
//! structured [`Error`]. Two groups matter to callers:
//!
//! - **Local errors** (`InvalidSlugLength`, `Config`) are synchronous and
//!   fatal to the call that raised them.
//! - **Remote errors** (`Network`, `Status`, `SlugOccupied`, `UnknownSlug`)
//!   describe a failed exchange with the shortener server. Slug resolution
//!   absorbs them by falling back to local generation; page fetching turns
//!   them into user-visible error state instead of propagating.
//!
//! No error here is fatal to the process. The distinguished variants
//! (`SlugOccupied`, `UnknownSlug`) exist so interfaces can branch on the
//! two server outcomes that carry meaning beyond "the request failed".

use thiserror::Error;

/// The main error type for slink-core operations.
///
/// `Display` renders a user-presentable message; the full chain stays
/// available through `source()` for the `Network` variant.
#[derive(Error, Debug)]
pub enum Error {
    /// A zero-length slug was requested.
    ///
    /// The server treats an empty slug as a missing value, so local
    /// generation rejects the length up front. This is raised
    /// synchronously, never from a settled request.
    #[error("Slug length must be at least 1 (got {0})")]
    InvalidSlugLength(usize),

    /// Transport-level failure talking to the shortener server.
    ///
    /// Covers connection errors, timeouts, TLS failures, and malformed
    /// responses. The underlying `reqwest::Error` is preserved for
    /// detailed inspection.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    ///
    /// The response body is carried along untouched; the server's own
    /// error payloads are often the most useful diagnostic.
    #[error("Server returned {status}: {body}")]
    Status {
        /// HTTP status code of the response.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The requested slug is already mapped to a URL (HTTP 409).
    ///
    /// This is the one shorten outcome callers are expected to branch on:
    /// the remedy is picking a different slug, not retrying.
    #[error("The slug '{0}' is already occupied")]
    SlugOccupied(String),

    /// No URL is registered under the given slug (HTTP 404 on lookup).
    #[error("No URL is registered for slug '{0}'")]
    UnknownSlug(String),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Get the error category as a string identifier.
    ///
    /// Used as the `category` field on diagnostic log records so failures
    /// can be grouped without parsing messages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use slink_core::Error;
    ///
    /// let error = Error::Config("missing field".to_string());
    /// assert_eq!(error.category(), "config");
    /// ```
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::InvalidSlugLength(_) => "invalid_slug_length",
            Self::Network(_) => "network",
            Self::Status { .. } => "status",
            Self::SlugOccupied(_) => "slug_occupied",
            Self::UnknownSlug(_) => "unknown_slug",
            Self::Config(_) => "config",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
///
/// Used throughout slink-core for consistent error handling.
pub type Result<T> = std::result::Result<T, Error>;
