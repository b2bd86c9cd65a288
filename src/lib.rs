//! Browser client for the CourseCraft learning platform.
//!
//! ARCHITECTURE
//! ============
//! The crate is a client-side rendered Leptos app. `catalog` holds the
//! static learning content, `state` the pure interaction models (chat
//! sessions, the wizard, the quiz), `net` the REST client, and `pages` /
//! `components` the views over them. Everything in `catalog` and `state`
//! compiles and tests natively; browser-only code sits behind the `csr`
//! feature.

pub mod app;
pub mod catalog;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
