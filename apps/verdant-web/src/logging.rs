//! Console logging for the browser shell

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = warn)]
    fn console_warn(s: &str);
}

/// Log an informational message
pub fn log(message: &str) {
    console_log(&format!("[verdant] {}", message));
}

/// Log a warning
pub fn warn(message: &str) {
    console_warn(&format!("[verdant] {}", message));
}
