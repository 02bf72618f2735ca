//! # client
//!
//! Leptos + WASM frontend for the Meowww chat rooms.
//!
//! This crate contains the pages, the append-only message table, the
//! submission form, the one-way notification receiver, and the attention
//! signal shown in the page title. Pure state machines live in `state` and
//! `net` so they can be tested without a browser; everything touching
//! `web_sys` is gated behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
