//! Backend location for REST calls.
//!
//! Resolution order: the page global `window.BACKEND_URL`, then the
//! `BACKEND_URL` environment variable at compile time, then same-origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Runtime configuration for the client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash; empty means same-origin.
    pub backend_url: String,
}

impl ClientConfig {
    #[must_use]
    pub fn new(backend_url: &str) -> Self {
        Self { backend_url: normalize_base_url(backend_url) }
    }

    /// Resolve configuration from the page and the build environment.
    #[must_use]
    pub fn from_env() -> Self {
        window_backend_url()
            .or_else(|| option_env!("BACKEND_URL").map(str::to_owned))
            .map(|url| Self::new(&url))
            .unwrap_or_default()
    }

    /// Absolute URL for an endpoint path such as `/api/tokens`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.backend_url)
        } else {
            format!("{}/{path}", self.backend_url)
        }
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn window_backend_url() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        let value = js_sys::Reflect::get(window.as_ref(), &wasm_bindgen::JsValue::from_str("BACKEND_URL")).ok()?;
        value.as_string().filter(|url| !url.trim().is_empty())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
