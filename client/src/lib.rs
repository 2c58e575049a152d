//! # login-client
//!
//! Leptos + WASM frontend for the login portal.
//!
//! This crate contains the page shell, routes, form components, the login
//! form state, and the REST helper that posts credentials to the remote
//! authentication endpoint. The `hydrate` feature builds the browser bundle;
//! the `ssr` feature lets the `login-server` host render the same views.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging, resolve the theme, then hydrate.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let mode = util::theme::init();
    log::debug!("theme initialized: {}", mode.as_attr());

    leptos::mount::hydrate_body(app::App);
}
