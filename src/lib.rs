//! # fieldfare-client
//!
//! Leptos + WASM frontend for the Fieldfare wildlife dashboard. Replaces the
//! React + Next.js client with a Rust-native UI layer over the same REST
//! backend (bearer-token auth, `/api/v1`).
//!
//! This crate contains pages, components, the shared session state, and the
//! authenticated fetch layer that every page goes through for API access.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
