//! # site
//!
//! Leptos + WASM front end for the Green Felt Billiards venue page.
//!
//! Widget rules live in [`state`] as plain structs so they can be tested
//! without a browser; [`components`] wrap them in signals and render the
//! markup; browser side effects sit behind the `hydrate` feature.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the widgets to the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating venue page");
    leptos::mount::hydrate_body(app::App);
}
