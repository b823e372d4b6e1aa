//! HTTP API handlers

use crate::catalog::Catalog;
use crate::filter::DeviceFilter;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use device_types::Device;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub author: Arc<str>,
    started: Instant,
}

impl AppState {
    pub fn new(catalog: Catalog, author: impl Into<Arc<str>>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            author: author.into(),
            started: Instant::now(),
        }
    }
}

/// API routes, ready to be merged into the app router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(status_handler))
        .route("/api/devices", get(devices_handler))
        .with_state(state)
}

/// General status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub service: String,
    pub version: String,
    pub author: String,
    pub device_count: usize,
    pub uptime_secs: u64,
}

/// GET /status - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "device-catalog".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        author: state.author.to_string(),
        device_count: state.catalog.len(),
        uptime_secs: state.started.elapsed().as_secs(),
    })
}

/// Same parameters the UI keeps in its URL
#[derive(Debug, Default, Deserialize)]
pub struct DeviceQuery {
    pub query: Option<String>,
    pub lines: Option<String>,
}

/// GET /api/devices - Device array, optionally filtered
pub async fn devices_handler(
    State(state): State<AppState>,
    Query(params): Query<DeviceQuery>,
) -> Json<Vec<Device>> {
    let filter = DeviceFilter::from_params(params.query.as_deref(), params.lines.as_deref());
    let devices = filter.apply(state.catalog.devices());
    tracing::debug!(
        total = state.catalog.len(),
        matched = devices.len(),
        "Serving devices"
    );
    Json(devices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let catalog = Catalog::new(vec![
            Device::new("d1", "Camera Pro", "L1", "Protect"),
            Device::new("d2", "Switch 24", "L2", "Network"),
            Device::new("d3", "Camera Mini", "L1", "Protect"),
        ])
        .unwrap();
        AppState::new(catalog, "tester")
    }

    async fn get_json<T: serde::de::DeserializeOwned>(uri: &str) -> T {
        let response = router(test_state())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_status_reports_author_and_count() {
        let status: StatusResponse = get_json("/status").await;
        assert_eq!(status.service, "device-catalog");
        assert_eq!(status.author, "tester");
        assert_eq!(status.device_count, 3);
    }

    #[tokio::test]
    async fn test_devices_unfiltered() {
        let devices: Vec<Device> = get_json("/api/devices").await;
        assert_eq!(devices.len(), 3);
    }

    #[tokio::test]
    async fn test_devices_filtered_by_query_and_lines() {
        let devices: Vec<Device> = get_json("/api/devices?query=CAM").await;
        assert_eq!(devices.len(), 2);

        let devices: Vec<Device> = get_json("/api/devices?lines=L2").await;
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].id, "d2");

        let devices: Vec<Device> = get_json("/api/devices?query=mini&lines=L1%2CL2").await;
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].id, "d3");
    }
}
