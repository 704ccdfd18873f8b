//! Query normalization and request URL construction.

use reqwest::Url;

use crate::error::FetchError;

/// Trim raw input. Returns `None` for empty or whitespace-only queries.
pub fn normalize_query(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Parse and validate a search endpoint. Only absolute http(s) URLs are accepted.
pub fn parse_endpoint(endpoint: &str) -> Result<Url, FetchError> {
    let url = Url::parse(endpoint)
        .map_err(|e| FetchError::InvalidEndpoint(format!("{endpoint}: {e}")))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(FetchError::InvalidEndpoint(format!(
            "Unsupported scheme: {} (only http/https allowed)",
            url.scheme()
        )));
    }
    Ok(url)
}

/// Build `<endpoint>?q=<query>&page=<page>` with the query percent-encoded.
pub fn search_url(endpoint: &Url, query: &str, page: u32) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("q", query)
        .append_pair("page", &page.to_string());
    url
}
