//! Request routing for the web API
//!
//! `handle` maps a method and request path to a status code and JSON body.
//! It performs no I/O, so the HTTP server and the tests drive it the same way.
//!
//! | Path                         | Handler          |
//! |------------------------------|------------------|
//! | `/`                          | `welcome`        |
//! | `/api/health`                | `health`         |
//! | `/api/note/<note>`           | `note`           |
//! | `/api/chord/<root>/<type>`   | `chord`          |
//! | `/api/scale/<root>/<type>`   | `scale`          |
//! | `/api/notes`                 | `all_notes`      |
//! | `/api/chord-types`           | `chord_types`    |
//! | `/api/scale-types`           | `scale_types`    |

use serde::Serialize;
use serde_json::Value;

use crate::theory::{self, TheoryError};

use super::helpers::{error_json, percent_decode, to_json};
use super::types::{ChordTypeList, HealthStatus, NoteList, ScaleTypeList, Welcome};

pub const WELCOME_MESSAGE: &str = "Welcome to MusicTheoryAI";
pub const WELCOME_DESCRIPTION: &str = "An interactive platform for learning music theory";

/// Endpoint directory served at `/`, in display order
pub const ENDPOINTS: [(&str, &str); 7] = [
    ("/api/note/<note>", "Get information about a note"),
    ("/api/chord/<root>/<type>", "Get information about a chord"),
    ("/api/scale/<root>/<type>", "Get information about a scale"),
    ("/api/notes", "List all available notes"),
    ("/api/chord-types", "List all available chord types"),
    ("/api/scale-types", "List all available scale types"),
    ("/api/health", "Health check endpoint"),
];

/// Status and body produced for one request
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    /// `None` for bodiless responses (CORS preflight)
    pub body: Option<Value>,
}

impl ApiResponse {
    pub fn ok<T: Serialize>(value: &T) -> Self {
        Self {
            status: 200,
            body: Some(to_json(value, "Failed to serialize response")),
        }
    }

    pub fn error(status: u16, msg: impl Into<String>) -> Self {
        Self {
            status,
            body: Some(error_json(msg)),
        }
    }

    pub fn no_content() -> Self {
        Self { status: 204, body: None }
    }

    pub fn to_json_string(&self) -> String {
        match &self.body {
            Some(body) => body.to_string(),
            None => String::new(),
        }
    }
}

impl From<TheoryError> for ApiResponse {
    fn from(err: TheoryError) -> Self {
        ApiResponse::error(err.status_code(), err.to_string())
    }
}

/// Route a request. `path` may carry a query string, which is ignored.
pub fn handle(method: &str, path: &str) -> ApiResponse {
    match method {
        "GET" | "HEAD" => {}
        "OPTIONS" => return ApiResponse::no_content(),
        other => return ApiResponse::error(405, format!("Method not allowed: {}", other)),
    }

    let path_only = path.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
    let segments: Vec<String> = path_only
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .map(percent_decode)
        .collect();
    let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

    match segments.as_slice() {
        [] => welcome(),
        ["api", "health"] => health(),
        ["api", "note", name] => note(name),
        ["api", "chord", root, chord_type] => chord(root, chord_type),
        ["api", "scale", root, scale_type] => scale(root, scale_type),
        ["api", "notes"] => all_notes(),
        ["api", "chord-types"] => chord_types(),
        ["api", "scale-types"] => scale_types(),
        _ => ApiResponse::error(404, format!("Not found: {}", path_only)),
    }
}

pub fn welcome() -> ApiResponse {
    let endpoints = ENDPOINTS
        .iter()
        .map(|(path, description)| (path.to_string(), Value::from(*description)))
        .collect();

    ApiResponse::ok(&Welcome {
        message: WELCOME_MESSAGE.to_string(),
        description: WELCOME_DESCRIPTION.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints,
    })
}

pub fn health() -> ApiResponse {
    ApiResponse::ok(&health_status())
}

/// Current health document, timestamped with local time
pub fn health_status() -> HealthStatus {
    HealthStatus {
        status: "healthy".to_string(),
        timestamp: chrono::Local::now()
            .format("%Y-%m-%dT%H:%M:%S%.6f")
            .to_string(),
    }
}

pub fn note(name: &str) -> ApiResponse {
    match theory::note_info(name) {
        Ok(info) => ApiResponse::ok(&info),
        Err(e) => e.into(),
    }
}

pub fn chord(root: &str, chord_type: &str) -> ApiResponse {
    match theory::chord_info(root, chord_type) {
        Ok(info) => ApiResponse::ok(&info),
        Err(e) => e.into(),
    }
}

pub fn scale(root: &str, scale_type: &str) -> ApiResponse {
    match theory::scale_info(root, scale_type) {
        Ok(info) => ApiResponse::ok(&info),
        Err(e) => e.into(),
    }
}

pub fn all_notes() -> ApiResponse {
    ApiResponse::ok(&note_list())
}

pub fn chord_types() -> ApiResponse {
    ApiResponse::ok(&chord_type_list())
}

pub fn scale_types() -> ApiResponse {
    ApiResponse::ok(&scale_type_list())
}

pub fn note_list() -> NoteList {
    let notes = theory::list_pitch_classes().to_vec();
    NoteList { count: notes.len(), notes }
}

pub fn chord_type_list() -> ChordTypeList {
    let types = theory::list_chord_types().to_vec();
    ChordTypeList { count: types.len(), types }
}

pub fn scale_type_list() -> ScaleTypeList {
    let types = theory::list_scale_types().to_vec();
    ScaleTypeList { count: types.len(), types }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_note_ok() {
        let resp = handle("GET", "/api/note/A");
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body, Some(json!({"name": "A", "frequency": 440.0, "octave": 4})));
    }

    #[test]
    fn test_note_with_encoded_sharp() {
        let resp = handle("GET", "/api/note/C%23");
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body.unwrap()["name"], "C#");
    }

    #[test]
    fn test_note_invalid() {
        let resp = handle("GET", "/api/note/H");
        assert_eq!(resp.status, 400);
        assert_eq!(resp.body, Some(json!({"error": "Invalid note: H"})));
    }

    #[test]
    fn test_chord_ok() {
        let resp = handle("GET", "/api/chord/C/major");
        assert_eq!(resp.status, 200);
        assert_eq!(
            resp.body,
            Some(json!({
                "root": "C",
                "type": "major",
                "notes": ["C", "E", "G"],
                "intervals": [0, 4, 7]
            }))
        );
    }

    #[test]
    fn test_chord_invalid_type() {
        let resp = handle("GET", "/api/chord/C/augmented");
        assert_eq!(resp.status, 400);
        assert_eq!(resp.body, Some(json!({"error": "Invalid chord type: augmented"})));
    }

    #[test]
    fn test_chord_invalid_root() {
        let resp = handle("GET", "/api/chord/H/major");
        assert_eq!(resp.status, 400);
        assert_eq!(resp.body, Some(json!({"error": "Invalid note: H"})));
    }

    #[test]
    fn test_scale_ok() {
        let resp = handle("GET", "/api/scale/A/pentatonic_minor");
        assert_eq!(resp.status, 200);
        assert_eq!(
            resp.body,
            Some(json!({
                "root": "A",
                "type": "pentatonic_minor",
                "notes": ["A", "C", "D", "E", "G"],
                "pattern": [0, 3, 5, 7, 10]
            }))
        );
    }

    #[test]
    fn test_scale_invalid_type() {
        let resp = handle("GET", "/api/scale/C/lydian");
        assert_eq!(resp.status, 400);
        assert_eq!(resp.body, Some(json!({"error": "Invalid scale type: lydian"})));
    }

    #[test]
    fn test_listings() {
        let notes = handle("GET", "/api/notes").body.unwrap();
        assert_eq!(notes["count"], 12);
        assert_eq!(notes["notes"][1], "C#");

        let chords = handle("GET", "/api/chord-types").body.unwrap();
        assert_eq!(
            chords,
            json!({"types": ["major", "minor", "major7", "minor7", "dominant7"], "count": 5})
        );

        let scales = handle("GET", "/api/scale-types").body.unwrap();
        assert_eq!(scales["count"], 5);
        assert_eq!(scales["types"][4], "blues");
    }

    #[test]
    fn test_health() {
        let body = handle("GET", "/api/health").body.unwrap();
        assert_eq!(body["status"], "healthy");
        let ts = body["timestamp"].as_str().unwrap();
        assert!(chrono::NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f").is_ok());
    }

    #[test]
    fn test_welcome_lists_endpoints() {
        let body = handle("GET", "/").body.unwrap();
        assert_eq!(body["message"], WELCOME_MESSAGE);
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        let endpoints = body["endpoints"].as_object().unwrap();
        assert_eq!(endpoints.len(), ENDPOINTS.len());
        assert!(endpoints.contains_key("/api/health"));
    }

    #[test]
    fn test_key_order_follows_declaration() {
        let text = handle("GET", "/api/chord/C/major").to_json_string();
        let root = text.find("\"root\"").unwrap();
        let kind = text.find("\"type\"").unwrap();
        let notes = text.find("\"notes\"").unwrap();
        let intervals = text.find("\"intervals\"").unwrap();
        assert!(root < kind && kind < notes && notes < intervals);
    }

    #[test]
    fn test_trailing_slash_and_query() {
        assert_eq!(handle("GET", "/api/notes/").status, 200);
        assert_eq!(handle("GET", "/api/note/E?verbose=1").status, 200);
    }

    #[test]
    fn test_not_found() {
        let resp = handle("GET", "/api/interval/C/E");
        assert_eq!(resp.status, 404);
        assert_eq!(resp.body, Some(json!({"error": "Not found: /api/interval/C/E"})));
    }

    #[test]
    fn test_methods() {
        assert_eq!(handle("OPTIONS", "/api/notes"), ApiResponse::no_content());
        assert_eq!(handle("HEAD", "/api/notes").status, 200);
        assert_eq!(handle("POST", "/api/notes").status, 405);
    }
}
