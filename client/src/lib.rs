//! # client
//!
//! Leptos + WASM frontend for the NeighbourCare services marketplace.
//!
//! This crate contains pages, components, reactive application state, and the
//! REST client for the remote marketplace API. Wire types and the pure booking
//! and session rules live in the `market` crate.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
