//! Key and key signature queries exposed to JavaScript
//!
//! Inputs arrive as strings (note text, clef and mode names). Malformed note
//! text is the only hard error; unknown clefs and modes fall back the same way
//! the harmony core does.

use wasm_bindgen::prelude::*;

use super::helpers::{is_fallback_clef, parse_note, serialize, validation_error};
use super::types::{KeySignatureInfo, TonalityInfo};
use crate::harmony::Tonality;
use crate::{wasm_log, wasm_warn};

fn tonality_from(tonic: &str, is_major: bool) -> Result<Tonality, JsValue> {
    let tonic = parse_note(tonic, "Invalid tonic").map_err(validation_error)?;
    Ok(Tonality::new(tonic, is_major))
}

/// Whether the tonic/mode pair is a conventionally notated key
#[wasm_bindgen(js_name = isValidKey)]
pub fn is_valid_key(tonic: &str, is_major: bool) -> Result<bool, JsValue> {
    Ok(tonality_from(tonic, is_major)?.is_valid_key())
}

/// All valid keys for mode "M" or "m", in circle-of-fifths order
#[wasm_bindgen(js_name = getValidKeys)]
pub fn get_valid_keys(mode: &str) -> Result<JsValue, JsValue> {
    let keys: Vec<TonalityInfo> = Tonality::valid_keys(mode)
        .iter()
        .map(TonalityInfo::from)
        .collect();

    if keys.is_empty() {
        wasm_warn!("getValidKeys: unknown mode '{}'", mode);
    }

    serialize(&keys, "Failed to serialize valid keys")
}

/// Key signature of a key in a clef ("treble", "bass", "alto", "tenor")
#[wasm_bindgen(js_name = getKeySignature)]
pub fn get_key_signature(tonic: &str, is_major: bool, clef: &str) -> Result<JsValue, JsValue> {
    let tonality = tonality_from(tonic, is_major)?;

    if is_fallback_clef(clef) {
        wasm_warn!("getKeySignature: unknown clef '{}', using treble", clef);
    }

    let signature = tonality.key_signature(clef);
    wasm_log!("getKeySignature: {} in {} -> [{}]", tonality, signature.clef().as_str(), signature);

    serialize(&KeySignatureInfo::from(&signature), "Failed to serialize key signature")
}

/// Whether a note is altered by the key's signature
///
/// `considerLetterOnly` defaults to true: any accidental on a signature
/// letter counts as a match.
#[wasm_bindgen(js_name = isInKeySignature)]
pub fn is_in_key_signature(
    tonic: &str,
    is_major: bool,
    note: &str,
    consider_letter_only: Option<bool>,
) -> Result<bool, JsValue> {
    let tonality = tonality_from(tonic, is_major)?;
    let note = parse_note(note, "Invalid note").map_err(validation_error)?;

    Ok(tonality
        .key_signature("treble")
        .is_in_key_signature(&note, consider_letter_only.unwrap_or(true)))
}

/// Display name of a key, e.g. "F# minor", "Gn major"
#[wasm_bindgen(js_name = describeTonality)]
pub fn describe_tonality(tonic: &str, is_major: bool) -> Result<String, JsValue> {
    Ok(tonality_from(tonic, is_major)?.to_string())
}
