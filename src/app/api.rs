//! Client-side API access.
//!
//! Response types mirror the server handlers in `crate::api`.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Fetching is only wired up in the browser; SSR renders the loading state.
    #[error("fetch is not available outside the browser")]
    Unavailable,

    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// GET /status
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct AppStatus {
    pub service: String,
    pub version: String,
    pub author: String,
    pub device_count: usize,
    pub uptime_secs: u64,
}

#[cfg(target_arch = "wasm32")]
fn js_error(value: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Request(format!("{value:?}"))
}

/// GET `url` and decode the JSON body.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;

        let window = web_sys::window().ok_or(ApiError::Unavailable)?;

        let init = web_sys::RequestInit::new();
        init.set_method("GET");
        let request = web_sys::Request::new_with_str_and_init(url, &init).map_err(js_error)?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(js_error)?;

        let response: web_sys::Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        let body = JsFuture::from(response.json().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        serde_wasm_bindgen::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::trace!(url, "Skipping fetch outside the browser");
        Err(ApiError::Unavailable)
    }
}
