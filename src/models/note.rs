//! Spelled pitch representation
//!
//! A `Note` is a letter, an accidental and an octave (C4 = middle C). Two
//! notes with the same sounding pitch but different spellings (F# and Gb)
//! are different notes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::elements::{Accidental, Letter};
use super::errors::TheoryError;
use super::interval::Interval;

/// Octave used when note text carries none
pub const DEFAULT_OCTAVE: i8 = 4;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Note {
    letter: Letter,
    accidental: Accidental,
    octave: i8,
}

impl Note {
    pub fn new(letter: Letter, accidental: Accidental, octave: i8) -> Self {
        Self {
            letter,
            accidental,
            octave,
        }
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    pub fn octave(&self) -> i8 {
        self.octave
    }

    /// Two-character name with an explicit natural: "F#", "Cb", "Gn"
    pub fn letter_accidental(&self) -> String {
        format!("{}{}", self.letter.as_str(), self.accidental.label())
    }

    /// Same letter and accidental, octave ignored
    pub fn same_spelling(&self, other: &Note) -> bool {
        self.letter == other.letter && self.accidental == other.accidental
    }

    /// Semitones above C0
    pub fn semitone(&self) -> i32 {
        self.octave as i32 * 12
            + self.letter.natural_semitone() as i32
            + self.accidental.semitone_offset() as i32
    }

    /// Transpose by a diatonic interval, keeping the spelling the interval implies
    ///
    /// The target letter comes from the interval number; the accidental is
    /// whatever makes up the remaining semitone difference. Fails when that
    /// would need more than a double sharp or double flat, or when the
    /// result falls outside the octave range.
    pub fn transpose(&self, interval: &Interval) -> Result<Note, TheoryError> {
        let position = self.letter.index() as i32 + interval.steps();
        let letter = Letter::from_index(position);
        let octave = self.octave as i32 + position.div_euclid(7);

        let target = self.semitone() + interval.semitones();
        let natural = octave * 12 + letter.natural_semitone() as i32;
        let offset = target - natural;

        let accidental = i8::try_from(offset)
            .ok()
            .and_then(Accidental::from_semitone_offset)
            .ok_or(TheoryError::Unspellable {
                letter,
                offset: offset.clamp(i8::MIN as i32, i8::MAX as i32) as i8,
            })?;

        let octave = i8::try_from(octave).map_err(|_| TheoryError::OctaveOutOfRange(octave))?;

        Ok(Note::new(letter, accidental, octave))
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.letter.as_str(), self.accidental.label(), self.octave)
    }
}

impl FromStr for Note {
    type Err = TheoryError;

    /// Parse "F#5", "Bb", "Gn4", "c#3". The octave defaults to 4.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let mut chars = text.chars();

        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| TheoryError::InvalidNote(s.to_string()))?;

        let rest = chars.as_str();
        let split = rest
            .find(|c: char| c.is_ascii_digit() || c == '-')
            .unwrap_or(rest.len());
        let (accidental_text, octave_text) = rest.split_at(split);

        let accidental = Accidental::parse(accidental_text)
            .ok_or_else(|| TheoryError::InvalidAccidental(accidental_text.to_string()))?;

        let octave = if octave_text.is_empty() {
            DEFAULT_OCTAVE
        } else {
            octave_text
                .parse::<i8>()
                .map_err(|_| TheoryError::InvalidNote(s.to_string()))?
        };

        Ok(Note::new(letter, accidental, octave))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::interval::{Direction, IntervalQuality};

    fn note(s: &str) -> Note {
        s.parse().unwrap()
    }

    #[test]
    fn test_letter_accidental_labels() {
        assert_eq!(note("F#5").letter_accidental(), "F#");
        assert_eq!(note("Cb4").letter_accidental(), "Cb");
        assert_eq!(note("G4").letter_accidental(), "Gn");
    }

    #[test]
    fn test_display() {
        assert_eq!(Note::new(Letter::F, Accidental::Sharp, 5).to_string(), "F#5");
        assert_eq!(Note::new(Letter::B, Accidental::Flat, 2).to_string(), "Bb2");
        assert_eq!(Note::new(Letter::G, Accidental::Natural, 4).to_string(), "Gn4");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(note("Bb"), Note::new(Letter::B, Accidental::Flat, 4));
        assert_eq!(note("c#3"), Note::new(Letter::C, Accidental::Sharp, 3));
        assert_eq!(note("Gn4"), Note::new(Letter::G, Accidental::Natural, 4));
        assert_eq!(note("A-1"), Note::new(Letter::A, Accidental::Natural, -1));
        assert_eq!(note("Ebb6"), Note::new(Letter::E, Accidental::DoubleFlat, 6));
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("".parse::<Note>().is_err());
        assert!("H4".parse::<Note>().is_err());
        assert!(matches!("C###4".parse::<Note>(), Err(TheoryError::InvalidAccidental(_))));
        assert!("C#x".parse::<Note>().is_err());
    }

    #[test]
    fn test_equality_includes_octave() {
        assert_ne!(note("F#4"), note("F#5"));
        assert!(note("F#4").same_spelling(&note("F#5")));
        assert!(!note("F#4").same_spelling(&note("Gb4")));
    }

    #[test]
    fn test_minor_third_up_relative_majors() {
        let up = Interval::minor_third_up();
        assert_eq!(note("A4").transpose(&up).unwrap(), note("C5"));
        assert_eq!(note("E4").transpose(&up).unwrap(), note("G4"));
        assert_eq!(note("D#4").transpose(&up).unwrap(), note("F#4"));
        assert_eq!(note("A#4").transpose(&up).unwrap(), note("C#5"));
        assert_eq!(note("Ab4").transpose(&up).unwrap(), note("Cb5"));
        assert_eq!(note("Bb4").transpose(&up).unwrap(), note("Db5"));
        assert_eq!(note("B4").transpose(&up).unwrap(), note("D5"));
    }

    #[test]
    fn test_transpose_down() {
        let down_fifth = Interval::new(Direction::Down, IntervalQuality::Perfect, 5).unwrap();
        assert_eq!(note("C4").transpose(&down_fifth).unwrap(), note("F3"));
        assert_eq!(note("Bb4").transpose(&down_fifth).unwrap(), note("Eb4"));
    }

    #[test]
    fn test_transpose_unspellable() {
        let up = Interval::minor_third_up();
        assert_eq!(note("Ebb4").transpose(&up).unwrap(), note("Gbb4"));

        // Fbb up a minor third would be Abbb
        let result = note("Fbb4").transpose(&up);
        assert!(matches!(result, Err(TheoryError::Unspellable { letter: Letter::A, offset: -3 })));
    }

    #[test]
    fn test_transpose_octave_out_of_range() {
        let up = Interval::minor_third_up();
        assert_eq!(note("B127").transpose(&up), Err(TheoryError::OctaveOutOfRange(128)));
        assert_eq!(note("G127").transpose(&up).unwrap(), note("Bb127"));

        let down_fifth = Interval::new(Direction::Down, IntervalQuality::Perfect, 5).unwrap();
        assert_eq!(note("C-128").transpose(&down_fifth), Err(TheoryError::OctaveOutOfRange(-129)));
    }

    #[test]
    fn test_serde_roundtrip() {
        let n = note("F#5");
        let json = serde_json::to_string(&n).unwrap();
        let parsed: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, n);
    }
}
