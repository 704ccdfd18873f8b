//! Wire types for the search endpoint.

use serde::{Deserialize, Serialize};

/// Number of results the endpoint returns per page. Hard-coded on the client;
/// the server has to agree or the page count will be wrong.
pub const PAGE_SIZE: u64 = 10;

/// One hit as returned by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    pub title: String,
    pub url: String,
    /// Excerpt of the page; may contain `<mark>` highlight tags.
    pub snippet: String,
}

/// Body of `GET /search?q=..&page=..`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<ResultItem>,
    pub total_results: u64,
    pub page: u32,
}
