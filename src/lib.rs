//! # projectgen-client
//!
//! Leptos + WASM frontend for the token-metered project-generation service.
//!
//! This crate contains the session manager and view router, the
//! authenticated request gateway, dashboard state, and the pages and
//! components that render them. The core (`session`, `net`, `state`) has no
//! Leptos dependency; `app`, `pages`, and `components` subscribe to it.

pub mod app;
pub mod client;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod testing;

/// WASM entry point: install browser logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
