//! Error types for pitch-class lookups
//!
//! Every variant is a client-input error: the tables themselves are fixed,
//! so a lookup can only fail because a name is not in the vocabulary.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Root or note name is not one of the twelve pitch classes
    #[error("Invalid note: {0}")]
    UnknownPitchClass(String),

    #[error("Invalid chord type: {0}")]
    UnknownChordType(String),

    #[error("Invalid scale type: {0}")]
    UnknownScaleType(String),
}

impl TheoryError {
    /// HTTP status for this error (all lookup errors are bad requests)
    pub fn status_code(&self) -> u16 {
        400
    }
}
