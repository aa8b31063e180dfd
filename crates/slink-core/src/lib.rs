//! # slink-core
//!
//! Core functionality for slink - a command-line companion for self-hosted URL shorteners.
//!
//! This crate provides the client-side building blocks for talking to a
//! shortener server: requesting and generating slugs, paging through the
//! stored URL collection, and loading user configuration. It's designed to
//! stay responsive when the server is not, degrading to local behavior
//! instead of failing.
//!
//! ## Architecture
//!
//! The crate is organized around several key components:
//!
//! - **Slug resolution**: Server-suggested slugs with a local random fallback
//! - **Paging**: A cached, page-at-a-time view of the URL collection
//! - **Configuration**: Defaults plus an optional TOML file in the platform config directory
//! - **Diagnostics**: A sink seam so absorbed failures are reported, not lost
//!
//! ## Quick Start
//!
//! ```rust
//! use slink_core::random_slug;
//!
//! // Generate a 6-character slug without contacting any server
//! let slug = random_slug(6)?;
//! assert_eq!(slug.len(), 6);
//! assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
//! # Ok::<(), slink_core::Error>(())
//! ```
//!
//! Contacting a server goes through [`ApiClient`], and [`SlugResolver`]
//! layers the local fallback on top:
//!
//! ```no_run
//! use slink_core::{ApiClient, SlugResolver};
//!
//! # async fn demo() -> slink_core::Result<()> {
//! let api = ApiClient::new("http://localhost:8000")?;
//! let resolver = SlugResolver::new(api);
//!
//! // Uses the server's suggestion, or a local slug if the server is down
//! let slug = resolver.resolve(6).await?;
//! println!("Suggested slug: {slug}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure Handling
//!
//! Operations that talk to the server return [`Result<T, Error>`]. The
//! resolver and page cache absorb remote failures into degraded behavior
//! and report the raw error through a [`DiagnosticSink`]; only local
//! precondition violations surface to callers:
//!
//! ```rust
//! use slink_core::{random_slug, Error};
//!
//! match random_slug(0) {
//!     Ok(slug) => println!("Generated {slug}"),
//!     Err(Error::InvalidSlugLength(len)) => eprintln!("Rejected length {len}"),
//!     Err(e) => eprintln!("Failed: {e}"),
//! }
//! ```

/// HTTP client for the shortener server's JSON API
pub mod api;
/// Configuration management with per-field defaults
pub mod config;
/// Failure reporting seam for absorbed errors
pub mod diagnostics;
/// Error types and result aliases
pub mod error;
/// Cached page-at-a-time view of the URL listing
pub mod pages;
/// Slug generation, remote with local fallback
pub mod slug;
/// Core data types and structures
pub mod types;

// Re-export commonly used types
pub use api::ApiClient;
pub use config::{Config, ServerConfig, SlugConfig};
pub use diagnostics::{DiagnosticSink, MemorySink, TracingSink};
pub use error::{Error, Result};
pub use pages::{PageCache, PAGE_FETCH_ERROR, URLS_PER_PAGE};
pub use slug::{random_slug, SlugResolver};
pub use types::*;
