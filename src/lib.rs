//! Page enhancement for a static portfolio site.
//!
//! This crate is compiled to WebAssembly and loaded by the page. At load
//! time it installs five independent effects: smooth scrolling for in-page
//! anchors, one-shot fade-in reveals driven by an intersection observer, a
//! mobile navigation toggle, a two-layer per-letter flip structure for
//! decorated links, and a bounded-time sweep that keeps a third-party 3D
//! embed's branding hidden. Effects share no state; a page missing any of
//! the expected markup simply gets the remaining effects.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Numeric tunables, JSON island parsing, validation |
//! | [`consts`] | Selectors, class names, and default values |
//! | [`dom`] | All `web_sys` wiring: listeners, observer, timers |
//! | [`flip`] | Per-character flip plan and transition timing |
//! | [`nav`] | Navigation panel toggle state |
//! | [`reveal`] | Reveal phase machine and style plans |
//! | [`scroll`] | Fragment-id parsing for anchor hrefs |
//! | [`suppress`] | Sweep budget and outcome types |

pub mod config;
pub mod consts;
pub mod dom;
pub mod flip;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod suppress;

use wasm_bindgen::prelude::*;
use web_sys::Document;

/// Module entry: set up diagnostics, then enhance once the DOM is ready.
///
/// # Errors
///
/// Returns `Err` if the environment has no window or document, or if the
/// ready-state listener cannot be attached.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    init_diagnostics();
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;
    dom::run_at_page_load(&document)
}

/// Enhance a document immediately, for hosts that manage their own load
/// timing instead of relying on the start hook.
#[wasm_bindgen]
pub fn enhance(document: &Document) {
    dom::enhance_now(document);
}

fn init_diagnostics() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&JsValue::from_str("logger already initialised"));
    }
}
