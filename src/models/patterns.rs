//! Interval patterns for chords and scales
//!
//! A pattern is an ordered list of semitone offsets from a root. Chord
//! patterns have 3-4 offsets, scale patterns 5-7. Every pattern starts at 0
//! and contains no duplicate offsets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::theory::TheoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordType {
    Major,
    Minor,
    Major7,
    Minor7,
    Dominant7,
}

/// Chord types in declaration order
pub const CHORD_TYPES: [ChordType; 5] = [
    ChordType::Major,
    ChordType::Minor,
    ChordType::Major7,
    ChordType::Minor7,
    ChordType::Dominant7,
];

impl ChordType {
    pub fn from_name(name: &str) -> Option<ChordType> {
        CHORD_TYPES.iter().copied().find(|t| t.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChordType::Major => "major",
            ChordType::Minor => "minor",
            ChordType::Major7 => "major7",
            ChordType::Minor7 => "minor7",
            ChordType::Dominant7 => "dominant7",
        }
    }

    /// Semitone offsets from the root
    pub fn intervals(&self) -> &'static [u8] {
        match self {
            ChordType::Major => &[0, 4, 7],
            ChordType::Minor => &[0, 3, 7],
            ChordType::Major7 => &[0, 4, 7, 11],
            ChordType::Minor7 => &[0, 3, 7, 10],
            ChordType::Dominant7 => &[0, 4, 7, 10],
        }
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChordType {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChordType::from_name(s).ok_or_else(|| TheoryError::UnknownChordType(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    Major,
    Minor,
    PentatonicMajor,
    PentatonicMinor,
    Blues,
}

/// Scale types in declaration order
pub const SCALE_TYPES: [ScaleType; 5] = [
    ScaleType::Major,
    ScaleType::Minor,
    ScaleType::PentatonicMajor,
    ScaleType::PentatonicMinor,
    ScaleType::Blues,
];

impl ScaleType {
    pub fn from_name(name: &str) -> Option<ScaleType> {
        SCALE_TYPES.iter().copied().find(|t| t.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleType::Major => "major",
            ScaleType::Minor => "minor",
            ScaleType::PentatonicMajor => "pentatonic_major",
            ScaleType::PentatonicMinor => "pentatonic_minor",
            ScaleType::Blues => "blues",
        }
    }

    /// Semitone offsets from the root, ascending
    pub fn pattern(&self) -> &'static [u8] {
        match self {
            ScaleType::Major => &[0, 2, 4, 5, 7, 9, 11],
            ScaleType::Minor => &[0, 2, 3, 5, 7, 8, 10],
            ScaleType::PentatonicMajor => &[0, 2, 4, 7, 9],
            ScaleType::PentatonicMinor => &[0, 3, 5, 7, 10],
            ScaleType::Blues => &[0, 3, 5, 6, 7, 10],
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScaleType {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScaleType::from_name(s).ok_or_else(|| TheoryError::UnknownScaleType(s.to_string()))
    }
}
