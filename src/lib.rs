//! # courseroom-client
//!
//! Leptos + WASM frontend for the Courseroom e-learning platform. Replaces
//! the React + Next.js admin and student UI with a Rust-native layer.
//!
//! This crate contains pages, components, application state, network types,
//! and the REST client for the course catalog and lecture upload endpoints.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

pub use app::App;

// WASM hydration entry point
#[cfg(feature = "hydrate")]
mod hydrate {
    use wasm_bindgen::prelude::wasm_bindgen;

    use crate::App;

    #[wasm_bindgen(start)]
    pub fn hydrate() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        leptos::mount::hydrate_body(App);
    }
}
