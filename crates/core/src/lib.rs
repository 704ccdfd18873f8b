//! DevSearch core: everything the search page does that is not drawing.
//!
//! A front end owns a [`view::SearchView`], feeds it form submits and
//! pagination clicks, performs the [`view::FetchTicket`]s it hands out with a
//! [`client::SearchClient`], and renders the resulting panel and pagination bar.
//!
//! # Modules
//!
//! - [`types`]: Wire types for the search endpoint
//! - [`query`]: Query trimming and request URL construction
//! - [`client`]: reqwest client for `GET /search`
//! - [`view`]: Search view state machine
//! - [`pagination`]: Page arithmetic and pagination controls
//! - [`snippet`]: Snippet sanitization (`<mark>` highlights only)
//! - [`config`]: `.devsearch.toml` loading
//! - [`error`]: Error types

pub mod client;
pub mod config;
pub mod error;
pub mod pagination;
pub mod query;
pub mod snippet;
pub mod types;
pub mod view;

pub use client::SearchClient;
pub use config::{load_config, SearchConfig};
pub use error::{ConfigError, FetchError};
pub use types::{ResultItem, SearchResponse, PAGE_SIZE};
pub use view::{FetchTicket, ResultsPanel, SearchView};
