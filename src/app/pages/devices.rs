//! Device listing page.
//!
//! Shows the catalog filtered by the `query` and `lines` URL parameters.

use dioxus::prelude::*;

use device_types::Device;

use crate::app::api::{self, AppStatus};
use crate::app::catalog::{use_device_catalog, LoadStatus};
use crate::app::components::{Layout, SearchBar, SelectFilter};
use crate::app::hooks::use_filtered_devices;
use crate::app::UrlText;

/// Device listing page component.
#[component]
pub fn Devices(query: UrlText, lines: UrlText) -> Element {
    let catalog = use_device_catalog();
    let filtered = use_filtered_devices();

    let status = use_resource(|| async { api::fetch_json::<AppStatus>("/status").await.ok() });
    let author = status.read().clone().flatten().map(|s| s.author);

    let total = catalog.devices.read().len();
    let shown = filtered.len();

    let content = match catalog.status.read().clone() {
        LoadStatus::Loading => rsx! {
            div { class: "notice", aria_busy: "true", "Loading devices..." }
        },
        LoadStatus::Failed(error) => rsx! {
            div { class: "notice error", "Could not load devices: {error}" }
        },
        LoadStatus::Ready if filtered.is_empty() => rsx! {
            div { class: "notice", "No devices match the current filter." }
        },
        LoadStatus::Ready => rsx! {
            table { class: "device-table",
                thead {
                    tr {
                        th { "Product" }
                        th { "Product line" }
                        th { "ID" }
                    }
                }
                tbody {
                    for device in filtered {
                        DeviceRow { key: "{device.id}", device: device.clone() }
                    }
                }
            }
        },
    };

    rsx! {
        Layout {
            title: "Devices".to_string(),
            author,

            div { class: "toolbar",
                SearchBar { query: query.as_str().to_string(), lines: lines.as_str().to_string() }
                small { "{shown} of {total} devices" }
                SelectFilter { query: query.as_str().to_string(), lines: lines.as_str().to_string() }
            }

            section { id: "devices",
                {content}
            }
        }
    }
}

#[component]
fn DeviceRow(device: Device) -> Element {
    rsx! {
        tr {
            td { "{device.product.name}" }
            td { "{device.line.name}" }
            td { code { "{device.id}" } }
        }
    }
}
