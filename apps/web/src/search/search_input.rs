//! Query form.

use dioxus::prelude::*;

/// Text input plus submit button. Submits the raw input; trimming and the
/// empty-query prompt are the view's business.
#[component]
pub fn SearchForm(on_submit: EventHandler<String>) -> Element {
    let mut query = use_signal(String::new);

    rsx! {
        form {
            id: "search-form",
            class: "search-form",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                on_submit.call(query());
            },

            svg {
                class: "search-icon",
                width: "16",
                height: "16",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "11", cy: "11", r: "8" }
                line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
            }

            input {
                id: "search-input",
                class: "search-input",
                r#type: "text",
                placeholder: "Search projects, tutorials, resources...",
                value: "{query}",
                autofocus: true,
                oninput: move |e: Event<FormData>| query.set(e.value()),
            }

            button { class: "search-submit", r#type: "submit", "Search" }
        }
    }
}
