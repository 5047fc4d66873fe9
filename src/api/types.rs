//! Response bodies for the web API
//!
//! Note, chord and scale bodies live in `models::derived`; this module holds
//! the listing, health, welcome and error documents.

use serde::{Deserialize, Serialize};

use crate::models::{ChordType, PitchClass, ScaleType};

/// `/api/notes`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NoteList {
    pub notes: Vec<PitchClass>,
    pub count: usize,
}

/// `/api/chord-types`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChordTypeList {
    pub types: Vec<ChordType>,
    pub count: usize,
}

/// `/api/scale-types`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScaleTypeList {
    pub types: Vec<ScaleType>,
    pub count: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,   // ISO-8601, local time
}

/// `/` landing document
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Welcome {
    pub message: String,
    pub description: String,
    pub version: String,
    pub endpoints: serde_json::Map<String, serde_json::Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}
