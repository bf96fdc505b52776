//! Element types and enumerations for tonal harmony
//!
//! This module defines the small closed sets the harmony core is built from:
//! pitch letters, accidentals, clefs and modes.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Natural semitone of each letter above C (C D E F G A B)
const LETTER_SEMITONES: [i8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Pitch letter name
#[wasm_bindgen]
#[repr(u8)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Letter {
    C = 0,
    D = 1,
    E = 2,
    F = 3,
    G = 4,
    A = 5,
    B = 6,
}

impl Letter {
    /// All letters in ascending staff order starting from C
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Staff position within the octave (C = 0 ... B = 6)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Letter at a staff position, wrapping around the octave
    pub fn from_index(index: i32) -> Letter {
        Letter::ALL[index.rem_euclid(7) as usize]
    }

    /// Semitones above C for the natural form of this letter
    pub fn natural_semitone(&self) -> i8 {
        LETTER_SEMITONES[self.index()]
    }

    /// Parse a letter name (case-insensitive)
    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
            Letter::G => "G",
            Letter::A => "A",
            Letter::B => "B",
        }
    }
}

/// Accidental types for pitch modification
#[wasm_bindgen]
#[repr(u8)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Accidental {
    /// No accidental
    Natural = 0,

    /// Sharp (#)
    Sharp = 1,

    /// Double sharp (##)
    DoubleSharp = 2,

    /// Flat (b)
    Flat = 3,

    /// Double flat (bb)
    DoubleFlat = 4,
}

impl Accidental {
    /// Get the symbol for this accidental (natural has no symbol)
    pub fn symbol(&self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
            Accidental::Flat => "b",
            Accidental::DoubleFlat => "bb",
        }
    }

    /// Get the label used in letter-accidental names, where natural is `n`
    pub fn label(&self) -> &'static str {
        match self {
            Accidental::Natural => "n",
            other => other.symbol(),
        }
    }

    /// Get the semitone offset for this accidental
    pub fn semitone_offset(&self) -> i8 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
            Accidental::Flat => -1,
            Accidental::DoubleFlat => -2,
        }
    }

    /// Accidental that raises or lowers a natural letter by `offset` semitones
    pub fn from_semitone_offset(offset: i8) -> Option<Self> {
        match offset {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            2 => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }

    /// Parse accidental from a string
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "##" | "x" | "𝄪" => Some(Accidental::DoubleSharp),
            "#" | "♯" => Some(Accidental::Sharp),
            "bb" | "𝄫" => Some(Accidental::DoubleFlat),
            "b" | "♭" => Some(Accidental::Flat),
            "" | "n" | "♮" => Some(Accidental::Natural),
            _ => None,
        }
    }

    pub fn is_sharp(&self) -> bool {
        matches!(self, Accidental::Sharp | Accidental::DoubleSharp)
    }

    pub fn is_flat(&self) -> bool {
        matches!(self, Accidental::Flat | Accidental::DoubleFlat)
    }
}

/// Staff clef
///
/// Only the four clefs key signatures are engraved for are modelled.
#[wasm_bindgen]
#[repr(u8)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Clef {
    #[default]
    Treble = 0,
    Bass = 1,
    Alto = 2,
    Tenor = 3,
}

impl Clef {
    pub const ALL: [Clef; 4] = [Clef::Treble, Clef::Bass, Clef::Alto, Clef::Tenor];

    /// Parse a clef name, returning None for anything unrecognized
    pub fn parse(name: &str) -> Option<Clef> {
        match name {
            "treble" => Some(Clef::Treble),
            "bass" => Some(Clef::Bass),
            "alto" => Some(Clef::Alto),
            "tenor" => Some(Clef::Tenor),
            _ => None,
        }
    }

    /// Resolve a clef name, falling back to treble for unknown names
    pub fn from_name(name: &str) -> Clef {
        Clef::parse(name).unwrap_or_else(|| {
            log::debug!("Unrecognized clef '{}', using treble", name);
            Clef::default()
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Clef::Treble => "treble",
            Clef::Bass => "bass",
            Clef::Alto => "alto",
            Clef::Tenor => "tenor",
        }
    }
}

/// Mode (quality) of a key
#[wasm_bindgen]
#[repr(u8)]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Major = 0,
    Minor = 1,
}

impl Mode {
    /// Parse the short mode code: `M` for major, `m` for minor
    pub fn from_code(code: &str) -> Option<Mode> {
        match code {
            "M" => Some(Mode::Major),
            "m" => Some(Mode::Minor),
            _ => None,
        }
    }

    pub fn from_is_major(is_major: bool) -> Mode {
        if is_major {
            Mode::Major
        } else {
            Mode::Minor
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Major => "major",
            Mode::Minor => "minor",
        }
    }

    pub fn is_major(&self) -> bool {
        *self == Mode::Major
    }
}
