//! # givespark
//!
//! Leptos + WASM frontend for a single-page charitable-donation campaign
//! site. Donations are simulated: totals live in the browser's localStorage
//! and nothing leaves the page.
//!
//! This crate contains pages, components, UI state, and the browser glue
//! (storage, timers, clipboard, reveal animations). The campaign numbers
//! themselves are owned by the rendering-independent `campaign` crate; the
//! UI reads snapshots and feeds events back in.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: mounts the app onto `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(crate::app::App);
}
