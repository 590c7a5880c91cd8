//! # dashboard-client
//!
//! Leptos + WASM frontend for the organization dashboard: the join-request
//! inbox where admins grant or decline access, and the app sidebar with its
//! identity control and organization switcher.
//!
//! Pages and components stay thin; the accept/decline state machine, org
//! grouping, nav filtering, and display fallbacks live in plain modules
//! (`state`, `config`, `util`) so they are testable off the rendering layer.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
