//! Field extraction from parsed records.
//!
//! Identifiers may be JSON strings or numbers (the database exporter writes
//! numeric ids). Labels may be strings or fixed-width arrays of
//! one-character strings padded with NUL.

use crate::error::{GraphError, Result};
use serde_json::Value;

/// Read an identifier field as text. Numbers use their decimal form.
///
/// `NaN` and `Infinity` are not JSON, so such ids fail earlier as `MalformedRecord`.
pub fn scalar_text(record: &Value, field: &'static str, line: usize) -> Result<String> {
    match record.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(GraphError::MissingField { line, field }),
    }
}

/// Read a label field, joining character arrays and trimming NUL padding.
pub fn label_text(record: &Value, field: &'static str, line: usize) -> Result<String> {
    match record.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Array(chars)) => {
            let mut label = String::new();
            for c in chars {
                match c {
                    Value::String(s) => label.push_str(s),
                    _ => return Err(GraphError::MissingField { line, field }),
                }
            }
            Ok(label.trim_end_matches('\0').to_string())
        }
        _ => Err(GraphError::MissingField { line, field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_text_string_and_number() {
        let record = json!({"id": "a", "n": 42, "f": 1.5});
        assert_eq!(scalar_text(&record, "id", 1).unwrap(), "a");
        assert_eq!(scalar_text(&record, "n", 1).unwrap(), "42");
        assert_eq!(scalar_text(&record, "f", 1).unwrap(), "1.5");
    }

    #[test]
    fn test_scalar_text_rejects_absent_and_structured() {
        let record = json!({"obj": {}, "null": null, "flag": true});
        for field in ["missing", "obj", "null", "flag"] {
            let err = scalar_text(&record, field, 7).unwrap_err();
            assert!(matches!(err, GraphError::MissingField { line: 7, .. }));
        }
    }

    #[test]
    fn test_scalar_text_on_non_object() {
        let record = json!([1, 2, 3]);
        assert!(scalar_text(&record, "id", 2).is_err());
    }

    #[test]
    fn test_label_text_char_array() {
        let record = json!({"name": ["A", "l", "p", "h", "a", "\u{0}", "\u{0}"]});
        assert_eq!(label_text(&record, "name", 1).unwrap(), "Alpha");
    }

    #[test]
    fn test_label_text_plain_string_untouched() {
        let record = json!({"name": "  spaced  "});
        assert_eq!(label_text(&record, "name", 1).unwrap(), "  spaced  ");
    }

    #[test]
    fn test_label_text_rejects_numbers() {
        let record = json!({"name": 5});
        let err = label_text(&record, "name", 4).unwrap_err();
        assert!(matches!(err, GraphError::MissingField { line: 4, field: "name" }));

        let record = json!({"name": ["a", 1]});
        assert!(label_text(&record, "name", 4).is_err());
    }
}
