//! # storefront-client
//!
//! Leptos + WASM frontend for the storefront and its admin back-office.
//!
//! This crate contains pages, components, application state and the typed
//! REST client for the `/api/v1/` backend. Pure state and request logic
//! builds without features and is unit tested natively; browser code is
//! gated on `hydrate`, server rendering on `ssr`.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
