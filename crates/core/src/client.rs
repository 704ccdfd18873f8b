//! HTTP client for the search endpoint.
//!
//! reqwest works on both native and WASM targets (browser `fetch()` under
//! WASM), so the same client serves the web front end and the CLI. No timeout
//! is configured: a hung request stays in flight until it resolves or errors.

use reqwest::Url;
use tracing::debug;

use crate::error::FetchError;
use crate::query::{parse_endpoint, search_url};
use crate::types::SearchResponse;
use crate::view::FetchTicket;

/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl SearchClient {
    pub fn new(endpoint: &str) -> Result<Self, FetchError> {
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: parse_endpoint(endpoint)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// `GET <endpoint>?q=<query>&page=<page>` and decode the body.
    ///
    /// The status code is not checked: any body that decodes as a
    /// [`SearchResponse`] is accepted, anything else is a [`FetchError::Decode`].
    pub async fn fetch_page(&self, query: &str, page: u32) -> Result<SearchResponse, FetchError> {
        let url = search_url(&self.endpoint, query, page);
        debug!(%url, "GET");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Request(format!("Failed to read response body: {e}")))?;

        serde_json::from_str(&body)
            .map_err(|e| FetchError::Decode(format!("{e} (status {status})")))
    }

    /// Perform the request a [`FetchTicket`] describes.
    pub async fn fetch(&self, ticket: &FetchTicket) -> Result<SearchResponse, FetchError> {
        self.fetch_page(&ticket.query, ticket.page).await
    }
}
