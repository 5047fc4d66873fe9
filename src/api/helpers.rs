//! Shared helpers for API operations
//!
//! Serialization, path decoding and error-body construction used by both the
//! HTTP routes and the WASM bindings.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::theory::TheoryError;

use super::types::ErrorBody;

// ============================================================================
// Serialization Helpers
// ============================================================================

/// Serialize a response body to a JSON value, logging failures
pub fn to_json<T: Serialize>(value: &T, error_context: &str) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        log::error!("{}: {}", error_context, e);
        error_json(format!("{}: {}", error_context, e))
    })
}

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Error Helpers
// ============================================================================

/// `{"error": msg}`
pub fn error_json(msg: impl Into<String>) -> serde_json::Value {
    let body = ErrorBody { error: msg.into() };
    serde_json::json!({ "error": body.error })
}

/// Convert a lookup error to a JsValue carrying its message
pub fn theory_error(err: TheoryError) -> JsValue {
    let msg = err.to_string();
    log::warn!("{}", msg);
    JsValue::from_str(&msg)
}

// ============================================================================
// Path Helpers
// ============================================================================

/// Decode `%XX` escapes in a single path segment
///
/// Sharps arrive escaped (`C%23` → `C#`) because a bare `#` starts the URL
/// fragment. Malformed escapes are kept literally; invalid UTF-8 is replaced.
pub fn percent_decode(segment: &str) -> String {
    let bytes = segment.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(hi * 16 + lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_decode_sharp() {
        assert_eq!(percent_decode("C%23"), "C#");
        assert_eq!(percent_decode("f%23"), "f#");
    }

    #[test]
    fn test_percent_decode_passthrough() {
        assert_eq!(percent_decode("pentatonic_major"), "pentatonic_major");
        assert_eq!(percent_decode(""), "");
    }

    #[test]
    fn test_percent_decode_malformed() {
        assert_eq!(percent_decode("C%2"), "C%2");
        assert_eq!(percent_decode("%zz"), "%zz");
        assert_eq!(percent_decode("%"), "%");
    }

    #[test]
    fn test_percent_decode_utf8() {
        assert_eq!(percent_decode("C%E2%99%AF"), "C♯");
    }

    #[test]
    fn test_error_json_shape() {
        assert_eq!(
            error_json("Invalid note: H"),
            serde_json::json!({"error": "Invalid note: H"})
        );
    }
}
