//! Lookup results computed on demand from the fixed tables
//!
//! None of these are stored; each request rebuilds them. Field order is the
//! JSON key order of the web API.

use serde::{Deserialize, Serialize};

use super::patterns::{ChordType, ScaleType};
use super::pitch_class::PitchClass;

/// A single note in the reference octave
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NoteInfo {
    pub name: PitchClass,
    pub frequency: f64,
    pub octave: u8,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChordInfo {
    pub root: PitchClass,
    #[serde(rename = "type")]
    pub chord_type: ChordType,
    pub notes: Vec<PitchClass>,
    pub intervals: Vec<u8>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScaleInfo {
    pub root: PitchClass,
    #[serde(rename = "type")]
    pub scale_type: ScaleType,
    pub notes: Vec<PitchClass>,
    pub pattern: Vec<u8>,
}
