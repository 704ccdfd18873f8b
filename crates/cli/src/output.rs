//! Terminal rendering of the search view.
//!
//! Mirrors the web page: one block per result card, the fixed prompt, error
//! and empty-state copy, and a pagination summary.

use devsearch_core::pagination::PaginationBar;
use devsearch_core::snippet::render_plain;
use devsearch_core::view::{
    ResultCard, ERROR_MESSAGE, NO_RESULTS_BODY, NO_RESULTS_HEADING, PROMPT_MESSAGE,
};
use devsearch_core::{ResultsPanel, SearchResponse, SearchView};

/// Highlight markers for `<mark>` segments.
const MARK_OPEN: &str = "[";
const MARK_CLOSE: &str = "]";

/// Formats the current view for human-readable terminal output.
pub fn format_view(view: &SearchView) -> String {
    let mut out = String::new();

    match view.panel() {
        None => {}
        Some(ResultsPanel::Prompt) => out.push_str(&format!("{PROMPT_MESSAGE}\n")),
        Some(ResultsPanel::Error) => out.push_str(&format!("{ERROR_MESSAGE}\n")),
        Some(ResultsPanel::NoResults) => {
            out.push_str(&format!("{NO_RESULTS_HEADING}\n\n"));
            for paragraph in NO_RESULTS_BODY {
                out.push_str(&format!("{paragraph}\n"));
            }
        }
        Some(ResultsPanel::Cards(cards)) => {
            for card in cards {
                out.push_str(&format_card(card));
            }
        }
    }

    if let Some(bar) = view.pagination() {
        out.push('\n');
        out.push_str(&format_pagination(bar));
    }

    out
}

fn format_card(card: &ResultCard) -> String {
    let snippet = render_plain(&card.snippet, MARK_OPEN, MARK_CLOSE);
    let snippet = snippet.split_whitespace().collect::<Vec<_>>().join(" ");
    if snippet.is_empty() {
        format!("{}. {} - [{}]\n\n", card.rank, card.title, card.url)
    } else {
        format!("{}. {} - [{}]\n    {}\n\n", card.rank, card.title, card.url, snippet)
    }
}

/// `Page 2 of 3 (25 results)` followed by the page numbers, current one bracketed.
pub fn format_pagination(bar: &PaginationBar) -> String {
    let pages: Vec<String> = bar
        .numbered()
        .map(|c| if c.active { format!("[{}]", c.target) } else { c.target.to_string() })
        .collect();
    format!(
        "Page {} of {} ({} results)\nPages: {}\n",
        bar.current,
        bar.total_pages,
        bar.total_results,
        pages.join(" ")
    )
}

/// Process exit code for a rendered view. Only the prompt and the error card
/// are failures; an empty result set is a normal outcome.
pub fn exit_code(panel: Option<&ResultsPanel>) -> i32 {
    match panel {
        Some(ResultsPanel::Cards(_)) | Some(ResultsPanel::NoResults) => 0,
        Some(ResultsPanel::Prompt) | Some(ResultsPanel::Error) | None => 1,
    }
}

/// Formats a raw response as pretty JSON.
pub fn format_json(response: &SearchResponse) -> String {
    serde_json::to_string_pretty(response).unwrap_or_else(|_| "{}".to_string())
}
