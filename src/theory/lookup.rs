/// Pitch-class lookups over the fixed tables
///
/// Chords and scales are both resolved by walking an interval pattern from a
/// root: each offset is added to the root's index and reduced modulo 12.
///
/// Example:
///   root B (11), major chord [0, 4, 7] → [11, 15, 18] mod 12 → [11, 3, 6]
///   → B, D#, F#
///
/// For chords and scales the type name is validated before the root, so a
/// request with both an unknown type and an unknown root reports the type.

use crate::models::derived::{ChordInfo, NoteInfo, ScaleInfo};
use crate::models::patterns::{ChordType, ScaleType, CHORD_TYPES, SCALE_TYPES};
use crate::models::pitch_class::{PitchClass, PITCH_CLASSES, REFERENCE_OCTAVE};

use super::TheoryError;

/// Reference frequency (Hz, octave 4) for a pitch-class name
pub fn lookup_frequency(name: &str) -> Result<f64, TheoryError> {
    let pitch: PitchClass = name.parse()?;
    Ok(pitch.frequency())
}

/// Walk `offsets` up from `root`, keeping pattern order
pub fn transpose(root: PitchClass, offsets: &[u8]) -> Vec<PitchClass> {
    offsets.iter().map(|&offset| root.transpose(offset)).collect()
}

/// Pitch classes of the chord `chord_type` built on `root`
pub fn chord_tones(root: &str, chord_type: &str) -> Result<Vec<PitchClass>, TheoryError> {
    let (root, chord_type) = resolve_chord(root, chord_type)?;
    Ok(transpose(root, chord_type.intervals()))
}

/// Pitch classes of the scale `scale_type` starting on `root`
pub fn scale_tones(root: &str, scale_type: &str) -> Result<Vec<PitchClass>, TheoryError> {
    let (root, scale_type) = resolve_scale(root, scale_type)?;
    Ok(transpose(root, scale_type.pattern()))
}

pub fn list_pitch_classes() -> &'static [PitchClass] {
    &PITCH_CLASSES
}

pub fn list_chord_types() -> &'static [ChordType] {
    &CHORD_TYPES
}

pub fn list_scale_types() -> &'static [ScaleType] {
    &SCALE_TYPES
}

/// Note description for a pitch-class name
pub fn note_info(name: &str) -> Result<NoteInfo, TheoryError> {
    let pitch: PitchClass = name.parse()?;
    Ok(NoteInfo {
        name: pitch,
        frequency: pitch.frequency(),
        octave: REFERENCE_OCTAVE,
    })
}

/// Chord description: root, type, resulting notes and the interval pattern
pub fn chord_info(root: &str, chord_type: &str) -> Result<ChordInfo, TheoryError> {
    let (root, chord_type) = resolve_chord(root, chord_type)?;
    Ok(ChordInfo {
        root,
        chord_type,
        notes: transpose(root, chord_type.intervals()),
        intervals: chord_type.intervals().to_vec(),
    })
}

/// Scale description: root, type, resulting notes and the step pattern
pub fn scale_info(root: &str, scale_type: &str) -> Result<ScaleInfo, TheoryError> {
    let (root, scale_type) = resolve_scale(root, scale_type)?;
    Ok(ScaleInfo {
        root,
        scale_type,
        notes: transpose(root, scale_type.pattern()),
        pattern: scale_type.pattern().to_vec(),
    })
}

fn resolve_chord(root: &str, chord_type: &str) -> Result<(PitchClass, ChordType), TheoryError> {
    let chord_type: ChordType = chord_type.parse()?;
    let root: PitchClass = root.parse()?;
    Ok((root, chord_type))
}

fn resolve_scale(root: &str, scale_type: &str) -> Result<(PitchClass, ScaleType), TheoryError> {
    let scale_type: ScaleType = scale_type.parse()?;
    let root: PitchClass = root.parse()?;
    Ok((root, scale_type))
}
