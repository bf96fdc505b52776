//! WASM build test
//!
//! This module tests that the exported API works when running in a browser.

#![cfg(target_arch = "wasm32")]

use tonality_wasm::api::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_is_valid_key() {
    assert_eq!(is_valid_key("G", true), Ok(true));
    assert_eq!(is_valid_key("G#", true), Ok(false));
}

#[wasm_bindgen_test]
fn test_invalid_tonic_is_rejected() {
    assert!(is_valid_key("H", true).is_err());
}

#[wasm_bindgen_test]
fn test_describe_tonality() {
    assert_eq!(describe_tonality("F#", false).unwrap(), "F# minor");
}

#[wasm_bindgen_test]
fn test_membership_default_letter_only() {
    assert_eq!(is_in_key_signature("G", true, "Fb4", None), Ok(true));
    assert_eq!(is_in_key_signature("G", true, "Fb4", Some(false)), Ok(false));
}

#[wasm_bindgen_test]
fn test_structured_results() {
    assert!(get_valid_keys("M").is_ok());
    assert!(get_key_signature("Bb", true, "tenor").is_ok());
}
