//! HTTP/JSON fetch bridge for browser read adapters.
//!
//! The wasm implementation wraps `window.fetch`; the non-wasm fallback always fails so callers
//! exercise their "degrade to empty" path in native builds and tests.

use serde::de::DeserializeOwned;

#[cfg(target_arch = "wasm32")]
mod imp {
    use serde::de::DeserializeOwned;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    fn js_error_to_string(err: JsValue) -> String {
        if let Some(text) = err.as_string() {
            return text;
        }
        if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
            if let Some(text) = message.as_string() {
                return text;
            }
        }
        format!("{err:?}")
    }

    pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
        let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
        let response = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(js_error_to_string)?;
        let response: web_sys::Response = response
            .dyn_into()
            .map_err(|_| "fetch did not resolve to a Response".to_string())?;
        if !response.ok() {
            return Err(format!("GET {url} failed with status {}", response.status()));
        }
        let body = JsFuture::from(response.json().map_err(js_error_to_string)?)
            .await
            .map_err(js_error_to_string)?;
        serde_wasm_bindgen::from_value(body).map_err(|e| e.to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use serde::de::DeserializeOwned;

    pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
        Err(format!("http fetch unavailable outside the browser: {url}"))
    }
}

/// Fetches `url` and decodes its JSON body.
pub(crate) async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    imp::fetch_json(url).await
}

/// Joins a base URL and a relative endpoint path with exactly one separating slash.
pub(crate) fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
