//! Tonal Harmony WASM Module
//!
//! Computes Western key facts for the notation front end: which tonic/mode
//! pairs are conventional keys, and the clef-aware key signature of each.

pub mod models;
pub mod harmony;
pub mod api;

// Re-export commonly used types
pub use harmony::{KeySignature, Tonality};
pub use models::{Accidental, Clef, Interval, Letter, Mode, Note, TheoryError};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        return;
    }

    log::info!("Tonal harmony WASM module initialized");
}
