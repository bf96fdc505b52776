//! Tonal harmony: keys and key signatures
//!
//! - `tonality`: keys, their validity and enumeration
//! - `key_signature`: clef-aware accidental lists derived from a key
//! - `ladder`: the circle-of-fifths tables both are built on

pub mod key_signature;
pub mod ladder;
pub mod tonality;

pub use key_signature::KeySignature;
pub use tonality::Tonality;
