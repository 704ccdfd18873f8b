//! Pagination bar.

use devsearch_core::pagination::{PageControl, PaginationBar};
use dioxus::prelude::*;

#[component]
pub fn Pagination(bar: PaginationBar, on_page: EventHandler<u32>) -> Element {
    // Labels are unique within a bar: Previous, 1..=n, Next.
    let buttons: Vec<(String, PageControl)> =
        bar.controls.into_iter().map(|c| (c.label(), c)).collect();

    rsx! {
        div {
            class: "pagination",
            for (label, control) in buttons {
                PageButton { key: "{label}", control, on_page }
            }
        }
    }
}

#[component]
fn PageButton(control: PageControl, on_page: EventHandler<u32>) -> Element {
    let label = control.label();
    let target = control.target;
    let class = if control.active { "pagination-btn active" } else { "pagination-btn" };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: control.disabled,
            aria_current: if control.active { "page" } else { "false" },
            onclick: move |_| on_page.call(target),
            "{label}"
        }
    }
}
