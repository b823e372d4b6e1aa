//! Product line filter dropdown.
//!
//! Lists every product line found in the catalog as a checkbox row. The
//! checked set is the `lines` URL parameter; clicking a row toggles its line
//! id and writes the new set back to the URL.

use dioxus::prelude::*;

use device_types::Line;

use super::outside_click::use_outside_click;
use super::IconButton;
use crate::app::catalog::use_device_catalog;
use crate::app::hooks::{replace_filter_route, toggle_line_route};
use crate::app::Route;
use crate::filter::{unique_lines, LineSelection};

/// Wraps both the toggle button and the menu, so pressing the button is not
/// treated as an outside click.
const FILTER_CONTAINER_ID: &str = "line-filter";

#[component]
pub fn SelectFilter(query: String, lines: String) -> Element {
    let catalog = use_device_catalog();
    let mut is_open = use_signal(|| false);
    use_outside_click(FILTER_CONTAINER_ID, is_open);

    let selection = LineSelection::parse(&lines);
    let product_lines = unique_lines(&catalog.devices.read());

    let menu_class = if is_open() {
        "dropdown-menu open"
    } else {
        "dropdown-menu"
    };
    let button_label = if selection.is_empty() {
        "Filter".to_string()
    } else {
        format!("Filter ({})", selection.len())
    };

    rsx! {
        div { id: FILTER_CONTAINER_ID, class: "select-filter",
            button {
                class: "filter-button",
                r#type: "button",
                aria_expanded: "{is_open}",
                onclick: move |_| is_open.toggle(),
                "{button_label}"
            }
            div { class: "{menu_class}",
                div { class: "close-filter",
                    span { "Filter" }
                    IconButton {
                        label: "Close filter".to_string(),
                        onclick: move |_| is_open.set(false),
                    }
                }
                div { class: "scrollable-section",
                    div { class: "filter-name",
                        strong { "Product line" }
                    }
                    ul { class: "line-options",
                        for device in product_lines {
                            LineOption {
                                key: "{device.line.id}",
                                checked: selection.contains(&device.line.id),
                                target: toggle_line_route(&query, &selection, &device.line.id),
                                line: device.line.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One checkbox row. `target` is the route after toggling this row's line.
#[component]
fn LineOption(line: Line, checked: bool, target: Route) -> Element {
    rsx! {
        li {
            class: "dropdown-item",
            onclick: move |_| replace_filter_route(target.clone()),
            input {
                class: "line-checkbox",
                r#type: "checkbox",
                tabindex: "-1",
                checked,
                // Checked state follows the URL; the row click does the toggling
                onchange: |_| {},
            }
            "{line.name}"
        }
    }
}
