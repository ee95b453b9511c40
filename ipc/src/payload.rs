//! Parsing of freeform developer input into bridge payloads.

use serde_json::Value;
use thiserror::Error;

/// Payload parsing errors
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Parses text as structured data
///
/// Fails on anything that is not valid JSON.
pub fn parse_structured(text: &str) -> Result<Value, PayloadError> {
    Ok(serde_json::from_str(text)?)
}

/// Parses text as structured data, falling back to the raw string
///
/// Empty input becomes `null`. The dispatcher accepts both shapes, so this
/// never fails.
pub fn parse_lenient(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_structured_object() {
        assert_eq!(parse_structured(r#"{"id": 1}"#).unwrap(), json!({"id": 1}));
    }

    #[test]
    fn test_parse_structured_rejects_garbage() {
        let err = parse_structured("{id: 1").unwrap_err();
        assert!(err.to_string().starts_with("Invalid JSON: "));
    }

    #[test]
    fn test_parse_lenient_falls_back_to_string() {
        assert_eq!(parse_lenient("hello"), Value::String("hello".to_string()));
        assert_eq!(parse_lenient("{\"id\": 1}"), json!({"id": 1}));
    }

    #[test]
    fn test_parse_lenient_empty_is_null() {
        assert_eq!(parse_lenient(""), Value::Null);
    }

    #[test]
    fn test_parse_lenient_keeps_scalars() {
        assert_eq!(parse_lenient("42"), json!(42));
        assert_eq!(parse_lenient("\"quoted\""), json!("quoted"));
    }
}
