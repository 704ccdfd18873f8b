//! Root application component.

use dioxus::prelude::*;

use crate::search::SearchPanel;
use crate::state::provide_search_client;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static APP_CSS: Asset = asset!("/assets/styles/app.css");

#[component]
pub fn App() -> Element {
    provide_search_client();

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: APP_CSS }

        SearchPanel {}
    }
}
