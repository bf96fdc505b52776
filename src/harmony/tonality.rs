//! Keys (tonic + mode)
//!
//! Any tonic/mode pair can be represented; `is_valid_key` tells whether it is
//! one of the 15 conventionally notated keys of its mode.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::key_signature::KeySignature;
use crate::models::note::DEFAULT_OCTAVE;
use crate::models::{Accidental, Clef, Letter, Mode, Note};

use Accidental::{Flat, Natural, Sharp};

/// Conventional major keys in circle-of-fifths order: no accidentals,
/// then sharp keys, then flat keys.
pub static MAJOR_KEYS: [(Letter, Accidental); 15] = [
    (Letter::C, Natural),
    (Letter::G, Natural),
    (Letter::D, Natural),
    (Letter::A, Natural),
    (Letter::E, Natural),
    (Letter::B, Natural),
    (Letter::F, Sharp),
    (Letter::C, Sharp),
    (Letter::F, Natural),
    (Letter::B, Flat),
    (Letter::E, Flat),
    (Letter::A, Flat),
    (Letter::D, Flat),
    (Letter::G, Flat),
    (Letter::C, Flat),
];

/// Conventional minor keys, ordered like `MAJOR_KEYS`
pub static MINOR_KEYS: [(Letter, Accidental); 15] = [
    (Letter::A, Natural),
    (Letter::E, Natural),
    (Letter::B, Natural),
    (Letter::F, Sharp),
    (Letter::C, Sharp),
    (Letter::G, Sharp),
    (Letter::D, Sharp),
    (Letter::A, Sharp),
    (Letter::D, Natural),
    (Letter::G, Natural),
    (Letter::C, Natural),
    (Letter::F, Natural),
    (Letter::B, Flat),
    (Letter::E, Flat),
    (Letter::A, Flat),
];

static VALID_KEYS: Lazy<HashSet<(Mode, Letter, Accidental)>> = Lazy::new(|| {
    let major = MAJOR_KEYS
        .iter()
        .map(|&(letter, accidental)| (Mode::Major, letter, accidental));
    let minor = MINOR_KEYS
        .iter()
        .map(|&(letter, accidental)| (Mode::Minor, letter, accidental));
    major.chain(minor).collect()
});

fn key_table(mode: Mode) -> &'static [(Letter, Accidental); 15] {
    match mode {
        Mode::Major => &MAJOR_KEYS,
        Mode::Minor => &MINOR_KEYS,
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct Tonality {
    tonic: Note,
    mode: Mode,
}

impl Tonality {
    /// Create a key. No validation is performed: G# major is representable.
    pub fn new(tonic: Note, is_major: bool) -> Self {
        Self {
            tonic,
            mode: Mode::from_is_major(is_major),
        }
    }

    pub fn tonic(&self) -> Note {
        self.tonic
    }

    pub fn is_major(&self) -> bool {
        self.mode.is_major()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether this is one of the conventionally notated keys of its mode
    pub fn is_valid_key(&self) -> bool {
        VALID_KEYS.contains(&(self.mode, self.tonic.letter(), self.tonic.accidental()))
    }

    /// Key signature of this key viewed in `clef` (unknown names select treble)
    pub fn key_signature(&self, clef: &str) -> KeySignature {
        KeySignature::new(self.tonic, self.is_major(), clef)
    }

    pub fn key_signature_in(&self, clef: Clef) -> KeySignature {
        KeySignature::with_clef(self.tonic, self.mode, clef)
    }

    /// All valid keys for a mode code (`M` or `m`); empty for any other code
    pub fn valid_keys(mode: &str) -> Vec<Tonality> {
        match Mode::from_code(mode) {
            Some(mode) => Self::valid_keys_in(mode),
            None => {
                log::debug!("Unrecognized mode code '{}'", mode);
                Vec::new()
            }
        }
    }

    pub fn valid_keys_in(mode: Mode) -> Vec<Tonality> {
        key_table(mode)
            .iter()
            .map(|&(letter, accidental)| Tonality {
                tonic: Note::new(letter, accidental, DEFAULT_OCTAVE),
                mode,
            })
            .collect()
    }
}

/// Keys are equal when their tonics are spelled alike (octave ignored) and
/// their modes match
impl PartialEq for Tonality {
    fn eq(&self, other: &Self) -> bool {
        self.tonic.same_spelling(&other.tonic) && self.mode == other.mode
    }
}

impl Eq for Tonality {}

impl fmt::Display for Tonality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tonic.letter_accidental(), self.mode.name())
    }
}
