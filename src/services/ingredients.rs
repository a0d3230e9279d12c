// ABOUTME: Tolerant decoder for the opaque ingredients text field
// ABOUTME: Yields a structured mapping when the text is a JSON object, None otherwise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Catalog Contributors

use serde_json::{Map, Value};

/// Attempt to decode stored ingredients text as a JSON mapping
///
/// Returns the mapping when `raw` parses as a JSON object. Returns `None`
/// when it does not parse, or parses to something other than an object;
/// the caller renders an absent ingredients view instead of failing the
/// record. Only the single-record read path calls this; listings return
/// the stored text verbatim.
#[must_use]
pub fn decode_ingredients(raw: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_object_decodes_to_mapping() {
        let decoded = decode_ingredients(r#"{"Pear": 3, "Spinach": "1 bunch"}"#).unwrap();

        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded["Pear"], json!(3));
        assert_eq!(decoded["Spinach"], json!("1 bunch"));
    }

    #[test]
    fn test_invalid_json_decodes_to_none() {
        assert!(decode_ingredients("not json at all").is_none());
        assert!(decode_ingredients(r#"{"Pear": "#).is_none());
        assert!(decode_ingredients("").is_none());
    }

    #[test]
    fn test_non_object_json_decodes_to_none() {
        assert!(decode_ingredients("[1, 2, 3]").is_none());
        assert!(decode_ingredients("42").is_none());
        assert!(decode_ingredients(r#""Pear""#).is_none());
    }

    #[test]
    fn test_empty_object_decodes_to_empty_mapping() {
        let decoded = decode_ingredients("{}").unwrap();
        assert!(decoded.is_empty());
    }
}
