//! Free-text search bound to the `query` URL parameter.

use dioxus::prelude::*;

use crate::app::hooks::{replace_filter_route, search_route};

#[component]
pub fn SearchBar(query: String, lines: String) -> Element {
    rsx! {
        input {
            class: "search-input",
            r#type: "search",
            placeholder: "Search",
            aria_label: "Search devices by product name",
            value: "{query}",
            // Keep the line selection as-is; only the query changes
            oninput: move |evt: FormEvent| replace_filter_route(search_route(evt.value(), &lines)),
        }
    }
}
