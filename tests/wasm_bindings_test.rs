//! WASM binding tests
//!
//! These run in a browser via `wasm-pack test`; the bindings hand back
//! `JsValue`s, which only exist on the wasm32 target.

#![cfg(target_arch = "wasm32")]

use music_theory_api::api::wasm::*;
use music_theory_api::models::ChordInfo;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_get_frequency() {
    assert_eq!(get_frequency("A").unwrap(), 440.0);
    assert_eq!(get_frequency("H").unwrap_err().as_string().unwrap(), "Invalid note: H");
}

#[wasm_bindgen_test]
fn test_get_chord() {
    let value = get_chord("C", "major").unwrap();
    let chord: ChordInfo = serde_wasm_bindgen::from_value(value).unwrap();
    assert_eq!(chord.intervals, vec![0, 4, 7]);
    assert_eq!(chord.notes.len(), 3);
}

#[wasm_bindgen_test]
fn test_get_scale_invalid_type() {
    let err = get_scale("C", "lydian").unwrap_err();
    assert_eq!(err.as_string().unwrap(), "Invalid scale type: lydian");
}

#[wasm_bindgen_test]
fn test_listings() {
    assert!(get_all_notes().is_ok());
    assert!(get_chord_types().is_ok());
    assert!(get_scale_types().is_ok());
    assert!(health().is_ok());
}
