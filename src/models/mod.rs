//! Models module for the music theory lookups
//!
//! Fixed vocabularies (pitch classes, chord and scale patterns) and the
//! lookup results derived from them.

pub mod derived;
pub mod patterns;
pub mod pitch_class;

// Re-export commonly used types
pub use derived::{ChordInfo, NoteInfo, ScaleInfo};
pub use patterns::{ChordType, ScaleType, CHORD_TYPES, SCALE_TYPES};
pub use pitch_class::{PitchClass, PITCH_CLASSES, REFERENCE_OCTAVE};
