#![forbid(unsafe_code)]
//! Fivestar for the browser.
//!
//! Two ways to put a rating on a page: [`element::MountedRating`] (exported
//! to JavaScript as `FivestarRating`) upgrades an existing element in place,
//! and [`components::Rating`] renders the widget from a Yew tree.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod bindings;
pub mod components;
pub mod dom;
pub mod element;
pub mod host;
pub mod schedule;
pub mod template;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
