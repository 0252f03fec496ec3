//! # tracklab-client
//!
//! Leptos + WASM frontend for the TrackLab whiteboard.
//!
//! This crate contains the routed pages, the session and toast contexts, the
//! auth API client, and the `LabSurface` bridge that hosts the imperative
//! `tracklab-canvas` engine. Browser-only code sits behind the `csr` feature
//! so the state and mapping logic builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and console logger, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("tracklab client starting");
    leptos::mount::mount_to_body(app::App);
}
