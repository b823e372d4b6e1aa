//! Application header bar.

use dioxus::prelude::*;

use crate::app::Route;

/// Title bar with logo, app name and author label.
///
/// The author label is omitted until the author is known.
#[component]
pub fn Header(author: Option<String>) -> Element {
    rsx! {
        header { class: "app-header",
            div { class: "app-name",
                LogoLink {}
                h1 { "Devices" }
            }
            if let Some(author) = author {
                p { class: "author-name", "Author/{author}" }
            }
        }
    }
}

/// Logo linking back to the unfiltered list.
#[component]
fn LogoLink() -> Element {
    rsx! {
        Link {
            class: "logo-link",
            to: Route::devices("", ""),
            svg { class: "logo", view_box: "0 0 24 24", fill: "currentColor",
                rect { x: "3", y: "3", width: "8", height: "8", rx: "1.5" }
                rect { x: "13", y: "3", width: "8", height: "8", rx: "1.5" }
                rect { x: "3", y: "13", width: "8", height: "8", rx: "1.5" }
                rect { x: "13", y: "13", width: "8", height: "8", rx: "1.5" }
            }
        }
    }
}
