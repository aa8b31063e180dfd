//! HTTP client for the shortener API.
//!
//! [`ApiClient`] is a thin typed wrapper over `reqwest` covering the four
//! endpoints the server exposes: slug generation, the paged URL listing,
//! shortening, and slug lookup. It maps the two meaningful non-success
//! statuses (409 on shorten, 404 on lookup) to distinguished errors and
//! folds everything else into [`Error::Status`] or [`Error::Network`].

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::debug;

use crate::types::PagedUrls;
use crate::{Error, Result};

/// Typed client for the shortener's HTTP API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct ShortenRequest<'a> {
    slug: &'a str,
    url: &'a str,
}

impl ApiClient {
    /// Creates a client for the server at `base_url` with the default
    /// 30-second request timeout.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    /// Creates a client with a custom request timeout (primarily for tests).
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("slink/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(Error::Network)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Requests a server-generated slug of the given length.
    ///
    /// The response body is returned verbatim. The server owns slug shape
    /// and uniqueness, so no client-side validation is applied to it.
    pub async fn generate_slug(&self, length: usize) -> Result<String> {
        let endpoint = format!("{}/api/slug/", self.base_url);
        let response = self
            .client
            .get(&endpoint)
            .query(&[("length", length.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, response).await);
        }

        let slug = response.text().await?;
        debug!("Server generated slug of {} characters", slug.len());
        Ok(slug)
    }

    /// Fetches one page of the URL listing.
    pub async fn list_page(&self, page: u32) -> Result<PagedUrls> {
        let endpoint = format!("{}/api/urls/", self.base_url);
        let response = self
            .client
            .get(&endpoint)
            .query(&[("page", page.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(status, response).await);
        }

        Ok(response.json().await?)
    }

    /// Registers `slug` as a short link for `url` and returns the slug the
    /// server stored.
    ///
    /// A 409 response maps to [`Error::SlugOccupied`], the one outcome
    /// callers are expected to branch on.
    pub async fn shorten(&self, slug: &str, url: &str) -> Result<String> {
        let endpoint = format!("{}/api/shorten/", self.base_url);
        let response = self
            .client
            .post(&endpoint)
            .json(&ShortenRequest { slug, url })
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::CONFLICT {
            return Err(Error::SlugOccupied(slug.to_string()));
        }
        if !status.is_success() {
            return Err(status_error(status, response).await);
        }

        let stored = response.text().await?;
        debug!("Registered slug '{stored}'");
        Ok(stored)
    }

    /// Looks up the full URL registered for `slug`.
    ///
    /// A 404 response maps to [`Error::UnknownSlug`].
    pub async fn expand(&self, slug: &str) -> Result<String> {
        let endpoint = format!("{}/api/unshorten/", self.base_url);
        let response = self
            .client
            .get(&endpoint)
            .query(&[("slug", slug)])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::UnknownSlug(slug.to_string()));
        }
        if !status.is_success() {
            return Err(status_error(status, response).await);
        }

        Ok(response.text().await?)
    }

    /// Base URL this client talks to, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

async fn status_error(status: StatusCode, response: reqwest::Response) -> Error {
    let body = response.text().await.unwrap_or_default();
    Error::Status {
        status: status.as_u16(),
        body,
    }
}
