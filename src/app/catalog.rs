//! Device catalog context.
//!
//! The device array is fetched once at the app root and shared through
//! context so the page, the line filter and the hooks all see the same list.

use dioxus::prelude::*;

use device_types::Device;

use super::api::{self, ApiError};

/// Load state of the catalog.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed(String),
}

/// Shared catalog handle (signals are `Copy`).
#[derive(Clone, Copy)]
pub struct DeviceCatalog {
    pub devices: Signal<Vec<Device>>,
    pub status: Signal<LoadStatus>,
}

/// Create the catalog context and start loading it. Call once at the root.
pub fn use_device_catalog_provider() -> DeviceCatalog {
    let catalog = use_context_provider(|| DeviceCatalog {
        devices: Signal::new(Vec::new()),
        status: Signal::new(LoadStatus::Loading),
    });

    use_future(move || async move {
        let mut devices = catalog.devices;
        let mut status = catalog.status;

        match api::fetch_json::<Vec<Device>>("/api/devices").await {
            Ok(list) => {
                tracing::info!(count = list.len(), "Device catalog loaded");
                devices.set(list);
                status.set(LoadStatus::Ready);
            }
            // Server render: stay in the loading state until the client hydrates
            Err(ApiError::Unavailable) => {}
            Err(e) => {
                tracing::error!("Failed to load device catalog: {}", e);
                status.set(LoadStatus::Failed(e.to_string()));
            }
        }
    });

    catalog
}

/// Access the catalog created by [`use_device_catalog_provider`].
pub fn use_device_catalog() -> DeviceCatalog {
    use_context::<DeviceCatalog>()
}
