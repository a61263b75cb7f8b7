//! Reelbase UI
//!
//! Single-page film records browser built with Leptos (WASM).
//!
//! # Features
//!
//! - Record table with inline editing and metadata detail rows
//! - Free-text search
//! - Create-record form
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. View logic and the HTTP client live in the `reelbase` crate;
//! this crate renders them and wires user events to the controller.

use leptos::*;

mod app;
mod components;
mod config;
mod logging;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let (config, config_error) = config::load_config();
    logging::init(&config.logging.level);

    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Embedded config unreadable, using defaults");
    }
    tracing::info!(
        api_base = %config.api_base(),
        "Reelbase UI v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Mount the app to the document body
    mount_to_body(move || view! { <app::App config=config /> });
}
