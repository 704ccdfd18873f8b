//! Results container contents.

use devsearch_core::view::{
    ResultCard, ERROR_MESSAGE, NO_RESULTS_BODY, NO_RESULTS_HEADING, PROMPT_MESSAGE,
};
use devsearch_core::ResultsPanel;
use dioxus::prelude::*;

#[component]
pub fn Results(panel: ResultsPanel) -> Element {
    match panel {
        ResultsPanel::Prompt => rsx! {
            div { class: "result-card", "{PROMPT_MESSAGE}" }
        },
        ResultsPanel::Error => rsx! {
            div { class: "result-card result-card--error", "{ERROR_MESSAGE}" }
        },
        ResultsPanel::NoResults => rsx! {
            div {
                class: "no-results-message",
                h3 { "{NO_RESULTS_HEADING}" }
                for paragraph in NO_RESULTS_BODY {
                    p { "{paragraph}" }
                }
            }
        },
        ResultsPanel::Cards(cards) => rsx! {
            for (rank, card) in cards.into_iter().map(|c| (c.rank, c)) {
                ResultCardView { key: "{rank}", card }
            }
        },
    }
}

/// Title link (new browsing context), URL, highlighted snippet.
#[component]
fn ResultCardView(card: ResultCard) -> Element {
    rsx! {
        div {
            class: "result-card",
            a {
                class: "result-title",
                href: "{card.url}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{card.title}"
            }
            p { class: "result-url", "{card.url}" }
            p {
                class: "result-snippet",
                for segment in card.snippet.iter() {
                    if segment.highlighted {
                        mark { "{segment.text}" }
                    } else {
                        "{segment.text}"
                    }
                }
            }
        }
    }
}
