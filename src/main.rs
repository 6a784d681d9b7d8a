//! WiFi Marketing Dashboard
//!
//! Marketing analytics front-end for businesses offering customer WiFi,
//! built with Leptos (WASM).
//!
//! # Features
//!
//! - Visitor and conversion metrics by date range
//! - Campaign creation and tracking
//! - Session handling against an external identity provider
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles
//! to WebAssembly. Dashboard state is in-memory; only authentication
//! talks to the network.

use leptos::*;

mod analytics;
mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
