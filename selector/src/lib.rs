//! Board selector for the ESP32 web flasher page.
//!
//! This crate is compiled to WebAssembly with the `browser` feature and loaded
//! by the flasher page. It renders one radio option per supported board and
//! points the ESP Web Tools install button at the chosen board's manifest.
//! The flashing itself is done by the install button; this crate never reads
//! manifest contents.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`selector`] | Selection state machine and installer dispatch |
//! | [`view`] | Pure description of the option list |
//! | [`probe`] | Web Serial capability check |
//! | [`registry`] | Inline-JSON or compiled-in board table |
//! | [`logging`] | Console logger and panic hook |
//! | [`consts`] | Element ids and class names shared with the page |
//! | `dom` | web-sys adapter (`browser` feature only) |

pub mod consts;
#[cfg(feature = "browser")]
pub mod dom;
pub mod logging;
pub mod probe;
pub mod registry;
pub mod selector;
pub mod view;

/// WASM entry point: set up logging, then start once the DOM is ready.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    logging::init();
    dom::on_ready(dom::start);
}
