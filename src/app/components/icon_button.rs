//! Small borderless icon button.

use dioxus::prelude::*;

/// Close ("X") icon button.
#[component]
pub fn IconButton(label: String, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: "icon-button",
            r#type: "button",
            aria_label: "{label}",
            onclick: move |evt| onclick.call(evt),
            svg { class: "h-4 w-4", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M6 18L18 6M6 6l12 12" }
            }
        }
    }
}
