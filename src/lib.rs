//! Music Theory API
//!
//! Pitch-class lookups (notes, chords, scales) over fixed 12-tone tables,
//! exposed as a JSON web API and as WASM bindings.

pub mod api;
pub mod config;
pub mod models;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;
pub mod theory;

// Re-export commonly used types
pub use models::{ChordType, PitchClass, ScaleType};
pub use theory::TheoryError;

use wasm_bindgen::prelude::*;

// Runs when the WASM module is instantiated.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A second instantiation finds the logger already installed.
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Music theory WASM module initialized");
}
