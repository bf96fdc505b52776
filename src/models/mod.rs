//! Models module for the tonal harmony core
//!
//! This module contains the pitch value types the harmony
//! computations are expressed in.

pub mod elements;
pub mod errors;
pub mod interval;
pub mod note;

// Re-export commonly used types
pub use elements::{Accidental, Clef, Letter, Mode};
pub use errors::TheoryError;
pub use interval::{Direction, Interval, IntervalQuality};
pub use note::Note;
