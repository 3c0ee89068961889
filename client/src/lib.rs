//! # client
//!
//! Leptos + WASM browser client for the Parley chat room.
//!
//! This crate contains the chat page, its components, session/chat state, the
//! WebSocket client, and pure rendering helpers. Browser-only code (socket,
//! storage, file reads) is gated behind the `hydrate` feature so state and
//! rendering logic unit-test natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: mount the application into the document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
