//! # pblog-ui
//!
//! Leptos + WASM helpers for the blog front-end: form error banner and
//! loading toggle, email validation, JSON API requests, timestamp formatting,
//! page/category navigation, and a confirmation dialog.
//!
//! Browser-only behavior sits behind the `hydrate` feature; without it the
//! same API compiles for SSR and tests, with network and navigation calls
//! reduced to no-ops.

pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// Browser entry point: panic hook and console logging.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
}
