//! # portfolio-client
//!
//! Leptos + WASM frontend for the single-page portfolio site.
//!
//! The interactive core is small: the theme preference (`state::theme` with
//! browser adapters in `util::dark_mode`), in-page section navigation
//! (`util::scroll`), and the contact form state machine (`state::contact`)
//! talking to the external endpoint through `net::api`. Everything else is
//! static content (`content`) rendered by `pages` and `components`.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
