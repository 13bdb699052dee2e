//! Browser adapters backed by `web-sys`, plus the wasm entry point that
//! wires them into the toggle controller on page load.
//!
//! Builds for `wasm32-unknown-unknown` only and is therefore kept out of the
//! native workspace.

mod control;
mod engine;
mod page;
mod storage;

pub use control::{DomToggleControl, TOGGLE_ID};
pub use engine::JtdThemeEngine;
pub use page::DomPageShell;
pub use storage::LocalStoragePreferenceStore;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;

use powermon_theme_app::controller::ThemeToggleController;

/// Module entry point: run once the DOM is ready.
#[wasm_bindgen(start)]
pub fn start() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    if document.ready_state() == "loading" {
        let closure = Closure::<dyn FnMut()>::new(init_page);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref());
        // Listener lives for the page lifetime.
        closure.forget();
    } else {
        init_page();
    }
}

/// Wire the browser adapters into the controller and run initialization.
fn init_page() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(page) = DomPageShell::locate(&document) else {
        return;
    };

    let store = LocalStoragePreferenceStore::new();
    let engine = JtdThemeEngine;
    let control = DomToggleControl::locate(&document);

    ThemeToggleController::new(store, engine, control, page).init();
}
