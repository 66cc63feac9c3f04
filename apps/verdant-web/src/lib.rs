//! Browser shell for Verdant
//!
//! Glues the library crates to the browser platform:
//!
//! - [`fetch`]: executes `HttpRequest` values via the fetch API
//! - [`storage`]: localStorage persistence for the scan log and session
//! - [`pointer`]: scoped window-level pointer capture feeding the overlay
//! - [`shell`]: the [`AppShell`] wasm-bindgen export driving it all
//!
//! The page renders the DOM; this crate owns every piece of state behind
//! it.

pub mod fetch;
pub mod logging;
pub mod pointer;
pub mod shell;
pub mod storage;

pub use shell::AppShell;

use wasm_bindgen::prelude::*;

/// Module init: route panics to the console in debug builds.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
