//! # client
//!
//! Leptos + WASM frontend for the DevMeet conference registration app.
//!
//! This crate contains the landing, registration, and admin pages, their
//! state machines, the REST helpers that talk to `server`, and the toast
//! overlay. The same code renders on the server (`ssr` feature) and
//! hydrates in the browser (`hydrate` feature).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the reactive app to server-rendered HTML.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
