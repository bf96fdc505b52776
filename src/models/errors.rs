//! Error types for the pitch value types
//!
//! The harmony core itself never fails; these errors only come from parsing
//! note text and from interval arithmetic that cannot be spelled.

use thiserror::Error;

use super::elements::Letter;
use super::interval::IntervalQuality;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Note text could not be parsed (e.g. "H#4", "")
    #[error("Invalid note: '{0}'")]
    InvalidNote(String),

    /// Accidental text is not one of n, #, b, ##, bb
    #[error("Invalid accidental: '{0}'")]
    InvalidAccidental(String),

    /// Quality does not exist for this interval number (e.g. minor fifth)
    #[error("Invalid interval: {quality:?} {number}")]
    InvalidInterval { quality: IntervalQuality, number: u8 },

    /// Transposition would need more than a double accidental
    #[error("Cannot spell {letter:?} at {offset:+} semitones from natural")]
    Unspellable { letter: Letter, offset: i8 },

    /// Transposition left the representable octave range
    #[error("Octave {0} is out of range")]
    OctaveOutOfRange(i32),
}
