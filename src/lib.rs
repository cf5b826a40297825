//! # portfolio
//!
//! Leptos + WASM single-page portfolio site. Sections are static content;
//! the one stateful piece is the `theme` module, which resolves light/dark
//! mode from a cookie, `localStorage` and the OS preference and keeps those
//! stores in sync.
//!
//! Build with the `csr` feature for the browser. Without it, the theme
//! resolver runs against in-memory hosts.

pub mod app;
pub mod components;
pub mod config;
pub mod data;
pub mod pages;
pub mod state;
pub mod theme;

/// Browser entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed; that logger stays.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
