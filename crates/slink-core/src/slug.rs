//! Slug acquisition: server-generated first, locally synthesized on failure.

use std::iter;
use std::sync::Arc;

use tracing::debug;

use crate::api::ApiClient;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::{Error, Result};

/// Characters a locally generated slug draws from.
const SLUG_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a pseudo-random slug of exactly `length` characters.
///
/// Characters are drawn uniformly from lowercase base-36, one at a time,
/// so the result always has the requested length. Lengths below 1 are
/// rejected with [`Error::InvalidSlugLength`] before any drawing happens.
///
/// # Examples
///
/// ```rust
/// use slink_core::random_slug;
///
/// let slug = random_slug(6)?;
/// assert_eq!(slug.len(), 6);
/// # Ok::<(), slink_core::Error>(())
/// ```
pub fn random_slug(length: usize) -> Result<String> {
    if length < 1 {
        return Err(Error::InvalidSlugLength(length));
    }

    let slug = iter::repeat_with(|| {
        let index = rand::random_range(0..SLUG_ALPHABET.len());
        SLUG_ALPHABET[index] as char
    })
    .take(length)
    .collect();
    Ok(slug)
}

/// Produces usable slugs, preferring the server's generator.
///
/// One failed remote attempt is recorded through the diagnostic sink and
/// answered with a locally generated slug of the same length. The remote
/// failure itself never reaches the caller, and no retry is made; for
/// lengths of at least 1 the resolved future always succeeds.
pub struct SlugResolver {
    api: ApiClient,
    sink: Arc<dyn DiagnosticSink>,
}

impl SlugResolver {
    /// Creates a resolver that reports absorbed failures through `tracing`.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self::with_sink(api, Arc::new(TracingSink))
    }

    /// Creates a resolver with a custom diagnostic sink.
    #[must_use]
    pub fn with_sink(api: ApiClient, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { api, sink }
    }

    /// Returns a slug of the given length.
    ///
    /// The server's response body is trusted verbatim on success. On any
    /// failure the raw error is recorded once and [`random_slug`] supplies
    /// the result, so length validation stays with the generator.
    pub async fn resolve(&self, length: usize) -> Result<String> {
        match self.api.generate_slug(length).await {
            Ok(slug) => Ok(slug),
            Err(failure) => {
                self.sink.record(&failure);
                debug!("Falling back to local slug generation");
                random_slug(length)
            },
        }
    }
}
