//! Key signatures
//!
//! A key signature is derived once, at construction, from a tonic and a mode.
//! The derivation yields a single ordered list of ladder rungs; each clef view
//! is that list with the clef's engraving octave attached, so every clef
//! shares the same letters and accidentals in the same order.

use std::fmt;

use super::ladder::{self, Rung, FLAT_LADDER, SHARP_LADDER};
use crate::models::{Accidental, Clef, Interval, Mode, Note};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySignature {
    tonic: Note,
    mode: Mode,
    clef: Clef,
    rungs: Vec<&'static Rung>,
}

impl KeySignature {
    /// Derive the key signature for a key, viewed in `clef`
    ///
    /// Unknown clef names select treble. Keys that are on neither ladder
    /// (C major, A minor, unconventional spellings) get an empty signature.
    pub fn new(tonic: Note, is_major: bool, clef: &str) -> Self {
        Self::with_clef(tonic, Mode::from_is_major(is_major), Clef::from_name(clef))
    }

    pub fn with_clef(tonic: Note, mode: Mode, clef: Clef) -> Self {
        Self {
            tonic,
            mode,
            clef,
            rungs: derive_rungs(&tonic, mode),
        }
    }

    /// Accidentals in engraving order, at this signature's clef octaves
    pub fn accidentals(&self) -> Vec<Note> {
        self.accidentals_in(self.clef)
    }

    /// Accidentals in engraving order, at the octaves of any clef
    pub fn accidentals_in(&self, clef: Clef) -> Vec<Note> {
        self.rungs.iter().map(|rung| rung.note_in(clef)).collect()
    }

    /// Whether a note's letter (and optionally accidental) is altered by this signature
    ///
    /// Clef-independent: only letters and accidentals are compared. With
    /// `consider_letter_only`, Fb counts as "in" G major because F is altered.
    pub fn is_in_key_signature(&self, note: &Note, consider_letter_only: bool) -> bool {
        self.rungs.iter().any(|rung| {
            rung.letter == note.letter()
                && (consider_letter_only || rung.accidental == note.accidental())
        })
    }

    pub fn has_sharps(&self) -> bool {
        self.first_accidental().is_some_and(|a| a.is_sharp())
    }

    pub fn has_flats(&self) -> bool {
        self.first_accidental().is_some_and(|a| a.is_flat())
    }

    fn first_accidental(&self) -> Option<Accidental> {
        self.rungs.first().map(|rung| rung.accidental)
    }

    /// Number of accidentals (0-7)
    pub fn len(&self) -> usize {
        self.rungs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rungs.is_empty()
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

    pub fn clef(&self) -> Clef {
        self.clef
    }
}

/// Walk both ladders from the relative-major reference tonic
///
/// At most one ladder matches a given tonic. Sharps come first to mirror
/// prepending the sharp walk after the flat one.
fn derive_rungs(tonic: &Note, mode: Mode) -> Vec<&'static Rung> {
    let reference = match mode {
        Mode::Major => *tonic,
        Mode::Minor => match tonic.transpose(&Interval::minor_third_up()) {
            Ok(relative_major) => relative_major,
            Err(err) => {
                log::warn!("No relative major for {} minor: {}", tonic.letter_accidental(), err);
                return Vec::new();
            }
        },
    };

    let mut rungs = ladder::walk(&SHARP_LADDER, &reference);
    rungs.extend(ladder::walk(&FLAT_LADDER, &reference));

    log::debug!(
        "Key signature for {} {}: {} accidental(s)",
        tonic.letter_accidental(),
        mode.name(),
        rungs.len()
    );

    rungs
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self.accidentals().iter().map(Note::to_string).collect();
        write!(f, "{}", labels.join(","))
    }
}
