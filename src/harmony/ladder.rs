//! Circle-of-fifths ladders for key signature derivation
//!
//! Each ladder lists, from the key with the most accidentals down to the key
//! with one, the reference (major) tonic of that key and the accidental it
//! adds to the signature. A key's signature is every rung from its own down
//! to the terminal rung, read back up so the result comes out in engraving
//! order (F# C# G# ... / Bb Eb Ab ...).

use crate::models::{Accidental, Clef, Letter, Note};

/// Octave each clef engraves an accidental at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClefOctaves {
    pub treble: i8,
    pub bass: i8,
    pub alto: i8,
    pub tenor: i8,
}

impl ClefOctaves {
    const fn new(treble: i8, bass: i8, alto: i8, tenor: i8) -> Self {
        Self {
            treble,
            bass,
            alto,
            tenor,
        }
    }

    pub fn get(&self, clef: Clef) -> i8 {
        match clef {
            Clef::Treble => self.treble,
            Clef::Bass => self.bass,
            Clef::Alto => self.alto,
            Clef::Tenor => self.tenor,
        }
    }
}

/// Staff positions on the upper and lower halves of each staff.
/// Tenor clef sharps break the zig-zag to stay on the staff.
const UPPER: ClefOctaves = ClefOctaves::new(5, 3, 4, 4);
const LOWER: ClefOctaves = ClefOctaves::new(4, 2, 3, 3);
const UPPER_TENOR_LOW: ClefOctaves = ClefOctaves::new(5, 3, 4, 3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rung {
    /// Reference major tonic that reaches this rung
    pub tonic: (Letter, Accidental),

    /// Accidental this rung adds to the signature
    pub letter: Letter,
    pub accidental: Accidental,

    pub octaves: ClefOctaves,
}

impl Rung {
    const fn new(
        tonic: (Letter, Accidental),
        letter: Letter,
        accidental: Accidental,
        octaves: ClefOctaves,
    ) -> Self {
        Self {
            tonic,
            letter,
            accidental,
            octaves,
        }
    }

    /// The accidental placed at its engraving octave for a clef
    pub fn note_in(&self, clef: Clef) -> Note {
        Note::new(self.letter, self.accidental, self.octaves.get(clef))
    }
}

use Accidental::{Flat, Natural, Sharp};

pub static FLAT_LADDER: [Rung; 7] = [
    Rung::new((Letter::C, Flat), Letter::F, Flat, LOWER),
    Rung::new((Letter::G, Flat), Letter::C, Flat, UPPER),
    Rung::new((Letter::D, Flat), Letter::G, Flat, LOWER),
    Rung::new((Letter::A, Flat), Letter::D, Flat, UPPER),
    Rung::new((Letter::E, Flat), Letter::A, Flat, LOWER),
    Rung::new((Letter::B, Flat), Letter::E, Flat, UPPER),
    Rung::new((Letter::F, Natural), Letter::B, Flat, LOWER),
];

pub static SHARP_LADDER: [Rung; 7] = [
    Rung::new((Letter::C, Sharp), Letter::B, Sharp, LOWER),
    Rung::new((Letter::F, Sharp), Letter::E, Sharp, UPPER),
    Rung::new((Letter::B, Natural), Letter::A, Sharp, LOWER),
    Rung::new((Letter::E, Natural), Letter::D, Sharp, UPPER),
    Rung::new((Letter::A, Natural), Letter::G, Sharp, UPPER_TENOR_LOW),
    Rung::new((Letter::D, Natural), Letter::C, Sharp, UPPER),
    Rung::new((Letter::G, Natural), Letter::F, Sharp, UPPER_TENOR_LOW),
];

/// Rungs reached by a reference tonic, in engraving order
///
/// Empty when the tonic is not on this ladder.
pub fn walk(ladder: &'static [Rung], tonic: &Note) -> Vec<&'static Rung> {
    let key = (tonic.letter(), tonic.accidental());

    match ladder.iter().position(|rung| rung.tonic == key) {
        Some(start) => ladder[start..].iter().rev().collect(),
        None => Vec::new(),
    }
}
