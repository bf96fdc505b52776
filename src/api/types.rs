//! Shared types for the WASM API
//!
//! Plain serializable views of the harmony values, shaped for the
//! JavaScript rendering layer.

use crate::harmony::{KeySignature, Tonality};

/// A key as seen from JavaScript
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TonalityInfo {
    pub tonic: String,          // Letter-accidental label, e.g. "F#", "Gn"
    pub is_major: bool,
    pub name: String,           // "F# minor"
}

impl From<&Tonality> for TonalityInfo {
    fn from(tonality: &Tonality) -> Self {
        Self {
            tonic: tonality.tonic().letter_accidental(),
            is_major: tonality.is_major(),
            name: tonality.to_string(),
        }
    }
}

/// A key signature as seen from JavaScript
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeySignatureInfo {
    pub tonic: String,
    pub is_major: bool,
    pub clef: String,
    pub accidentals: Vec<String>, // Engraving order with octave, e.g. ["F#5", "C#5"]
    pub has_sharps: bool,
    pub has_flats: bool,
}

impl From<&KeySignature> for KeySignatureInfo {
    fn from(signature: &KeySignature) -> Self {
        Self {
            tonic: signature.tonic().letter_accidental(),
            is_major: signature.is_major(),
            clef: signature.clef().as_str().to_string(),
            accidentals: signature.accidentals().iter().map(|n| n.to_string()).collect(),
            has_sharps: signature.has_sharps(),
            has_flats: signature.has_flats(),
        }
    }
}
