//! Error types for devsearch-core.
//!
//! Every fetch failure is collapsed to one user-facing message by the view,
//! so these variants exist for logging and for the CLI's exit status.

use thiserror::Error;

/// Errors that can occur while fetching a page of results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The configured endpoint is not an absolute http(s) URL
    #[error("Invalid search endpoint: {0}")]
    InvalidEndpoint(String),
    /// The request could not be sent or the body could not be read
    #[error("Request failed: {0}")]
    Request(String),
    /// The body was not a search response
    #[error("Invalid response body: {0}")]
    Decode(String),
}

/// Errors that can occur while loading `.devsearch.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not parse config: {0}")]
    Parse(String),
}
