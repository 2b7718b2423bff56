//! # client
//!
//! Leptos + WASM frontend for Profile Follow: log in, link a LeetCode
//! profile, follow other profiles, and compare solved counts on a
//! leaderboard.
//!
//! This crate contains pages, components, page state, and the REST client.
//! The `server` crate renders it with SSR; the `hydrate` feature builds the
//! browser bundle.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
