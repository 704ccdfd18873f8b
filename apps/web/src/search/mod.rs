//! Search page: query form, loader, results container and pagination bar.

mod pagination;
mod results;
mod search_input;

use devsearch_core::SearchView;
use dioxus::prelude::*;
use pagination::Pagination;
use results::Results;
use search_input::SearchForm;

use crate::state::{dispatch, use_search_client};

/// The whole search page. Owns the view state; children only receive snapshots
/// and typed callbacks.
#[component]
pub fn SearchPanel() -> Element {
    let mut view = use_signal(SearchView::new);
    let client = use_search_client();

    let on_submit = move |raw: String| {
        let ticket = view.write().submit_query(&raw);
        if let Some(ticket) = ticket {
            dispatch(view, client, ticket);
        }
    };

    let on_page = move |page: u32| {
        let ticket = view.write().request_page(page);
        if let Some(ticket) = ticket {
            dispatch(view, client, ticket);
        }
    };

    let state = view.read();
    let panel = state.panel().cloned();
    let bar = state.pagination().cloned();

    rsx! {
        div {
            class: if state.results_active() { "search-page results-active" } else { "search-page" },

            header {
                class: "search-header",
                h1 { class: "brand", "DevSearch" }
                SearchForm { on_submit }
            }

            div {
                id: "loader",
                class: if state.is_loading() { "loader" } else { "loader hidden" },
                span { class: "loader-dot" }
                span { class: "loader-dot" }
                span { class: "loader-dot" }
            }

            div {
                id: "results-container",
                class: "results-container",
                if let Some(panel) = panel {
                    Results { panel }
                }
            }

            div {
                id: "pagination-container",
                class: "pagination-container",
                if let Some(bar) = bar {
                    Pagination { bar, on_page }
                }
            }
        }
    }
}
