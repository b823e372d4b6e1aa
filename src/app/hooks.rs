//! Filter state hooks.
//!
//! The router is the source of truth for filter state: reads come from the
//! current route, writes replace the current history entry.

use dioxus::prelude::*;

use device_types::Device;

use super::catalog::use_device_catalog;
use super::Route;
use crate::filter::{DeviceFilter, LineSelection};

/// Filter built from the current `query` and `lines` parameters.
pub fn use_device_filter() -> DeviceFilter {
    let Route::Devices { query, lines } = use_route::<Route>();
    DeviceFilter::new(query.as_str(), LineSelection::parse(lines.as_str()))
}

/// Catalog devices matching the current URL filter.
pub fn use_filtered_devices() -> Vec<Device> {
    let catalog = use_device_catalog();
    let filter = use_device_filter();
    let devices = catalog.devices.read();
    filter.apply(&devices)
}

/// Route after toggling `line_id` in `selection`; `query` is carried over.
pub fn toggle_line_route(query: &str, selection: &LineSelection, line_id: &str) -> Route {
    let next = selection.clone().toggled(line_id);
    Route::devices(query, next.to_string())
}

/// Route after replacing the query text; `lines` is carried over.
pub fn search_route(query: String, lines: &str) -> Route {
    Route::devices(query, lines)
}

/// Navigate to a filter route without adding a history entry.
pub fn replace_filter_route(route: Route) {
    tracing::debug!(%route, "Updating filter parameters");
    navigator().replace(route);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_line_keeps_query() {
        let selection = LineSelection::parse("L1");

        let added = toggle_line_route("R&D cam", &selection, "L2");
        assert_eq!(added, Route::devices("R&D cam", "L1,L2"));

        let removed = toggle_line_route("R&D cam", &selection, "L1");
        assert_eq!(removed, Route::devices("R&D cam", ""));
    }

    #[test]
    fn test_toggle_line_route_survives_url() {
        use std::str::FromStr;

        let route = toggle_line_route("a&lines=x", &LineSelection::default(), "L3");
        let parsed = Route::from_str(&route.to_string()).unwrap();
        let Route::Devices { query, lines } = parsed;
        assert_eq!(query.as_str(), "a&lines=x");
        assert_eq!(lines.as_str(), "L3");
    }

    #[test]
    fn test_search_keeps_lines() {
        assert_eq!(
            search_route("switch".to_string(), "L1,L2"),
            Route::devices("switch", "L1,L2")
        );
    }
}
