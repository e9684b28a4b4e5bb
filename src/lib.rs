//! # palace-client
//!
//! Leptos + WASM frontend for the AI Memory Palace service, replacing the
//! original React SPA with a Rust-native UI layer.
//!
//! The crate centers on the authentication/session subsystem: a persisted
//! bearer token (`net::token_store`), a gateway that attaches it to every
//! request and collapses the session on rejection (`net::gateway`), and
//! the session state machine that gates protected views
//! (`state::session`). Pages and components render against that state.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydrate entry point invoked by the WASM loader in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
