//! Diatonic intervals
//!
//! An interval is a letter distance (its number) plus a quality that fixes the
//! exact semitone size. Only what note transposition needs is modelled.

use serde::{Deserialize, Serialize};

use super::errors::TheoryError;

/// Semitone size of the major/perfect form of each simple interval (unison..seventh)
const MAJOR_OR_PERFECT_SEMITONES: [i8; 7] = [0, 2, 4, 5, 7, 9, 11];

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntervalQuality {
    Perfect,
    Major,
    Minor,
    Augmented,
    Diminished,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    fn sign(&self) -> i8 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }
}

/// A directed interval such as "up a minor third"
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "IntervalRepr")]
pub struct Interval {
    direction: Direction,
    quality: IntervalQuality,
    number: u8,
}

/// Unchecked wire form; deserialized intervals go through `Interval::new`
#[derive(Deserialize)]
struct IntervalRepr {
    direction: Direction,
    quality: IntervalQuality,
    number: u8,
}

impl TryFrom<IntervalRepr> for Interval {
    type Error = TheoryError;

    fn try_from(repr: IntervalRepr) -> Result<Self, Self::Error> {
        Interval::new(repr.direction, repr.quality, repr.number)
    }
}

impl Interval {
    /// Build an interval, rejecting qualities the number cannot take
    /// (minor fifth, perfect third, number zero...)
    pub fn new(direction: Direction, quality: IntervalQuality, number: u8) -> Result<Self, TheoryError> {
        if number == 0 {
            return Err(TheoryError::InvalidInterval { quality, number });
        }

        let perfect_class = is_perfect_class(number);
        let valid = match quality {
            IntervalQuality::Perfect => perfect_class,
            IntervalQuality::Major | IntervalQuality::Minor => !perfect_class,
            IntervalQuality::Augmented => true,
            // A diminished unison has no meaning
            IntervalQuality::Diminished => number != 1,
        };

        if !valid {
            return Err(TheoryError::InvalidInterval { quality, number });
        }

        Ok(Self {
            direction,
            quality,
            number,
        })
    }

    /// Up a minor third: from a minor tonic to its relative major
    pub fn minor_third_up() -> Self {
        Self {
            direction: Direction::Up,
            quality: IntervalQuality::Minor,
            number: 3,
        }
    }

    /// Signed number of staff steps (letters) spanned
    pub fn steps(&self) -> i32 {
        (self.number as i32 - 1) * self.direction.sign() as i32
    }

    /// Signed size in semitones
    pub fn semitones(&self) -> i32 {
        let simple = ((self.number - 1) % 7) as usize;
        let octaves = ((self.number - 1) / 7) as i32;
        let base = MAJOR_OR_PERFECT_SEMITONES[simple] as i32;

        let adjustment = match self.quality {
            IntervalQuality::Perfect | IntervalQuality::Major => 0,
            IntervalQuality::Minor => -1,
            IntervalQuality::Augmented => 1,
            IntervalQuality::Diminished if is_perfect_class(self.number) => -1,
            IntervalQuality::Diminished => -2,
        };

        (base + adjustment + octaves * 12) * self.direction.sign() as i32
    }
}

/// Unisons, fourths, fifths and their compounds take perfect quality
fn is_perfect_class(number: u8) -> bool {
    matches!((number - 1) % 7, 0 | 3 | 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minor_third_size() {
        let interval = Interval::minor_third_up();
        assert_eq!(interval.semitones(), 3);
        assert_eq!(interval.steps(), 2);
    }

    #[test]
    fn test_perfect_and_compound_sizes() {
        let fifth = Interval::new(Direction::Up, IntervalQuality::Perfect, 5).unwrap();
        assert_eq!(fifth.semitones(), 7);

        let octave = Interval::new(Direction::Down, IntervalQuality::Perfect, 8).unwrap();
        assert_eq!(octave.semitones(), -12);
        assert_eq!(octave.steps(), -7);

        let tenth = Interval::new(Direction::Up, IntervalQuality::Major, 10).unwrap();
        assert_eq!(tenth.semitones(), 16);
    }

    #[test]
    fn test_altered_sizes() {
        let aug_fourth = Interval::new(Direction::Up, IntervalQuality::Augmented, 4).unwrap();
        assert_eq!(aug_fourth.semitones(), 6);

        let dim_seventh = Interval::new(Direction::Up, IntervalQuality::Diminished, 7).unwrap();
        assert_eq!(dim_seventh.semitones(), 9);

        let dim_fifth = Interval::new(Direction::Down, IntervalQuality::Diminished, 5).unwrap();
        assert_eq!(dim_fifth.semitones(), -6);
    }

    #[test]
    fn test_invalid_intervals() {
        assert!(Interval::new(Direction::Up, IntervalQuality::Minor, 5).is_err());
        assert!(Interval::new(Direction::Up, IntervalQuality::Perfect, 3).is_err());
        assert!(Interval::new(Direction::Up, IntervalQuality::Major, 0).is_err());
        assert!(Interval::new(Direction::Up, IntervalQuality::Diminished, 1).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let zero = serde_json::from_str::<Interval>(r#"{"direction":"Up","quality":"Major","number":0}"#);
        assert!(zero.is_err());

        let minor_fifth = serde_json::from_str::<Interval>(r#"{"direction":"Down","quality":"Minor","number":5}"#);
        assert!(minor_fifth.is_err());

        let third: Interval = serde_json::from_str(r#"{"direction":"Up","quality":"Minor","number":3}"#).unwrap();
        assert_eq!(third, Interval::minor_third_up());
        assert_eq!(third.semitones(), 3);
    }
}
