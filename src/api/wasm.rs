//! WASM API for pitch-class lookups
//!
//! JavaScript-facing wrappers over `theory`. Successful lookups return the
//! same documents as the web API; errors are thrown as strings carrying the
//! lookup error message (e.g. "Invalid note: H").

use wasm_bindgen::prelude::*;

use crate::theory;

use super::helpers::{serialize, theory_error};
use super::routes;

/// Get information about a note
#[wasm_bindgen(js_name = getNote)]
pub fn get_note(name: &str) -> Result<JsValue, JsValue> {
    let info = theory::note_info(name).map_err(theory_error)?;
    serialize(&info, "Failed to serialize note")
}

/// Get information about a chord
#[wasm_bindgen(js_name = getChord)]
pub fn get_chord(root: &str, chord_type: &str) -> Result<JsValue, JsValue> {
    let info = theory::chord_info(root, chord_type).map_err(theory_error)?;
    serialize(&info, "Failed to serialize chord")
}

/// Get information about a scale
#[wasm_bindgen(js_name = getScale)]
pub fn get_scale(root: &str, scale_type: &str) -> Result<JsValue, JsValue> {
    let info = theory::scale_info(root, scale_type).map_err(theory_error)?;
    serialize(&info, "Failed to serialize scale")
}

#[wasm_bindgen(js_name = getAllNotes)]
pub fn get_all_notes() -> Result<JsValue, JsValue> {
    serialize(&routes::note_list(), "Failed to serialize note list")
}

#[wasm_bindgen(js_name = getChordTypes)]
pub fn get_chord_types() -> Result<JsValue, JsValue> {
    serialize(&routes::chord_type_list(), "Failed to serialize chord types")
}

#[wasm_bindgen(js_name = getScaleTypes)]
pub fn get_scale_types() -> Result<JsValue, JsValue> {
    serialize(&routes::scale_type_list(), "Failed to serialize scale types")
}

#[wasm_bindgen(js_name = getFrequency)]
pub fn get_frequency(name: &str) -> Result<f64, JsValue> {
    theory::lookup_frequency(name).map_err(theory_error)
}

#[wasm_bindgen]
pub fn health() -> Result<JsValue, JsValue> {
    serialize(&routes::health_status(), "Failed to serialize health status")
}
