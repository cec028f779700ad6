//! # client
//!
//! Leptos + WASM random quote board.
//!
//! This crate contains the page, components, quote state, the ordered quote
//! fetcher with its built-in fallback, and the theme and share controllers.
//! Browser access is confined to `util::browser` behind the `hydrate`
//! feature; everything else builds and tests natively.

pub mod app;
pub mod components;
pub mod pages;
pub mod quotes;
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
