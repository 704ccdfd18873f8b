//! Search client context and request dispatch.

use devsearch_core::{FetchError, FetchTicket, SearchClient, SearchView};
use dioxus::prelude::*;
use tracing::info;

/// Client for the configured endpoint, or the reason it could not be built.
/// A broken endpoint surfaces as the generic error card on the first search.
pub type ClientSlot = Result<SearchClient, FetchError>;

/// Endpoint of the search API.
///
/// In the browser this is `/search` on the page's own origin; elsewhere it comes
/// from `.devsearch.toml` in the working directory or the user config dir.
pub fn resolve_endpoint() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        match web_sys::window().and_then(|w| w.location().origin().ok()) {
            Some(origin) => format!("{origin}/search"),
            None => devsearch_core::config::DEFAULT_ENDPOINT.to_string(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let cwd = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
        devsearch_core::load_config(&cwd).endpoint
    }
}

/// Build the client once and share it with every component below the root.
pub fn provide_search_client() -> Signal<ClientSlot> {
    use_context_provider(|| {
        let endpoint = resolve_endpoint();
        info!("Search endpoint: {endpoint}");
        Signal::new(SearchClient::new(&endpoint))
    })
}

pub fn use_search_client() -> Signal<ClientSlot> {
    use_context::<Signal<ClientSlot>>()
}

/// Perform `ticket` in the background and hand the outcome back to `view`.
///
/// Nothing is cancelled: if a newer ticket was issued meanwhile the view
/// drops this outcome.
pub fn dispatch(mut view: Signal<SearchView>, client: Signal<ClientSlot>, ticket: FetchTicket) {
    spawn(async move {
        let slot = client.read().clone();
        let outcome = match slot {
            Ok(client) => client.fetch(&ticket).await,
            Err(e) => Err(e),
        };
        view.write().complete(&ticket, outcome);
    });
}
