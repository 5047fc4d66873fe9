pub mod errors;
pub mod lookup;

pub use errors::TheoryError;
pub use lookup::{
    chord_info, chord_tones, list_chord_types, list_pitch_classes, list_scale_types,
    lookup_frequency, note_info, scale_info, scale_tones, transpose,
};
