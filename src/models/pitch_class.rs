/// The twelve equal-tempered pitch classes
///
/// Each pitch class has:
/// - a canonical sharp spelling ("C", "C#", ..., "B")
/// - an index 0-11 (C = 0)
/// - a reference frequency in octave 4 (A4 = 440 Hz)
///
/// Spellings are case-sensitive and flats are not accepted: "Db" and "c"
/// are both unknown pitch classes.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::theory::TheoryError;

/// Octave reported for every note lookup
pub const REFERENCE_OCTAVE: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitchClass {
    C,
    #[serde(rename = "C#")]
    Cs,
    D,
    #[serde(rename = "D#")]
    Ds,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    G,
    #[serde(rename = "G#")]
    Gs,
    A,
    #[serde(rename = "A#")]
    As,
    B,
}

/// Canonical ordering, indexed by semitone above C
pub const PITCH_CLASSES: [PitchClass; 12] = [
    PitchClass::C,
    PitchClass::Cs,
    PitchClass::D,
    PitchClass::Ds,
    PitchClass::E,
    PitchClass::F,
    PitchClass::Fs,
    PitchClass::G,
    PitchClass::Gs,
    PitchClass::A,
    PitchClass::As,
    PitchClass::B,
];

// name -> pitch class, built once per process
static BY_NAME: Lazy<HashMap<&'static str, PitchClass>> = Lazy::new(|| {
    PITCH_CLASSES
        .iter()
        .map(|&pc| (pc.as_str(), pc))
        .collect()
});

impl PitchClass {
    /// Look up a pitch class by its exact name
    pub fn from_name(name: &str) -> Option<PitchClass> {
        BY_NAME.get(name).copied()
    }

    /// Pitch class `semitones` above index 0, wrapping modulo 12
    pub fn from_index(semitones: usize) -> PitchClass {
        PITCH_CLASSES[semitones % 12]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PitchClass::C => "C",
            PitchClass::Cs => "C#",
            PitchClass::D => "D",
            PitchClass::Ds => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::Fs => "F#",
            PitchClass::G => "G",
            PitchClass::Gs => "G#",
            PitchClass::A => "A",
            PitchClass::As => "A#",
            PitchClass::B => "B",
        }
    }

    /// Semitones above C (0-11)
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Reference frequency in Hz for octave 4
    ///
    /// Values are the fixed two-decimal table, not computed from 440 * 2^(n/12).
    pub fn frequency(&self) -> f64 {
        match self {
            PitchClass::C => 261.63,
            PitchClass::Cs => 277.18,
            PitchClass::D => 293.66,
            PitchClass::Ds => 311.13,
            PitchClass::E => 329.63,
            PitchClass::F => 349.23,
            PitchClass::Fs => 369.99,
            PitchClass::G => 392.00,
            PitchClass::Gs => 415.30,
            PitchClass::A => 440.00,
            PitchClass::As => 466.16,
            PitchClass::B => 493.88,
        }
    }

    /// Pitch class reached by moving `offset` semitones up from this one
    pub fn transpose(&self, offset: u8) -> PitchClass {
        PitchClass::from_index(self.index() + offset as usize)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PitchClass {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PitchClass::from_name(s).ok_or_else(|| TheoryError::UnknownPitchClass(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_naturals() {
        assert_eq!(PitchClass::from_name("C"), Some(PitchClass::C));
        assert_eq!(PitchClass::from_name("E"), Some(PitchClass::E));
        assert_eq!(PitchClass::from_name("B"), Some(PitchClass::B));
    }

    #[test]
    fn test_from_name_sharps() {
        assert_eq!(PitchClass::from_name("C#"), Some(PitchClass::Cs));
        assert_eq!(PitchClass::from_name("F#"), Some(PitchClass::Fs));
        assert_eq!(PitchClass::from_name("A#"), Some(PitchClass::As));
    }

    #[test]
    fn test_from_name_rejects_other_spellings() {
        assert_eq!(PitchClass::from_name("c"), None);
        assert_eq!(PitchClass::from_name("Db"), None);
        assert_eq!(PitchClass::from_name("E#"), None);
        assert_eq!(PitchClass::from_name("H"), None);
        assert_eq!(PitchClass::from_name(""), None);
    }

    #[test]
    fn test_index_matches_canonical_order() {
        for (i, pc) in PITCH_CLASSES.iter().enumerate() {
            assert_eq!(pc.index(), i);
            assert_eq!(PitchClass::from_index(i), *pc);
        }
    }

    #[test]
    fn test_transpose_wraps() {
        assert_eq!(PitchClass::B.transpose(1), PitchClass::C);
        assert_eq!(PitchClass::A.transpose(3), PitchClass::C);
        assert_eq!(PitchClass::G.transpose(12), PitchClass::G);
    }

    #[test]
    fn test_parse_error_carries_name() {
        let err = "H".parse::<PitchClass>().unwrap_err();
        assert_eq!(err, TheoryError::UnknownPitchClass("H".to_string()));
    }

    #[test]
    fn test_serde_uses_sharp_names() {
        assert_eq!(serde_json::to_string(&PitchClass::Cs).unwrap(), "\"C#\"");
        let pc: PitchClass = serde_json::from_str("\"G#\"").unwrap();
        assert_eq!(pc, PitchClass::Gs);
    }
}
