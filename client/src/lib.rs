//! # client
//!
//! Leptos + WASM frontend for the Global Parcels service: a creation form,
//! a paginated table of the caller's parcels, and a single-parcel view.
//!
//! The crate builds twice: `hydrate` for the browser bundle and `ssr` for the
//! server that renders the initial HTML. Everything that talks to the Parcel
//! Service is compiled only into the browser build.

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
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
