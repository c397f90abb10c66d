//! # client
//!
//! Leptos + WASM frontend for the wish list app.
//!
//! This crate contains the routed pages, the carousel component, the
//! persisted wish store, and the splash-screen lifecycle. Browser-only code
//! is gated behind the `hydrate` feature; `ssr` enables server rendering.

pub mod app;
pub mod components;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
