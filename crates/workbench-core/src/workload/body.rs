//! Shared decoding of raw request bodies into serde-derived body records.
//!
//! Every workload declares a `#[derive(Deserialize)]` body struct whose
//! fields are all optional; required-field checks happen on the decoded
//! record so a missing field gets its own error.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::WorkloadError;

/// True for a body that carries no JSON at all.
pub(crate) fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

/// Parses `body` as JSON, then decodes the object into `T`.
pub(crate) fn decode_object<T: DeserializeOwned>(body: &[u8]) -> Result<T, WorkloadError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| WorkloadError::MalformedBody(e.to_string()))?;
    from_object(value)
}

/// Decodes an already-parsed JSON value, which must be an object.
///
/// Arrays are rejected here because serde would otherwise map them onto
/// struct fields by position.
pub(crate) fn from_object<T: DeserializeOwned>(value: Value) -> Result<T, WorkloadError> {
    if !value.is_object() {
        return Err(WorkloadError::InvalidBody(format!(
            "expected a JSON object, got {}",
            kind_of(&value)
        )));
    }
    serde_json::from_value(value).map_err(|e| WorkloadError::InvalidBody(e.to_string()))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        n: Option<i64>,
    }

    #[test]
    fn decodes_objects() {
        let sample: Sample = decode_object(br#"{"text":"hi","extra":true}"#).unwrap();
        assert_eq!(
            sample,
            Sample {
                text: Some("hi".into()),
                n: None
            }
        );
    }

    #[test]
    fn null_counts_as_absent() {
        let sample: Sample = decode_object(br#"{"text":null,"n":null}"#).unwrap();
        assert_eq!(sample, Sample { text: None, n: None });
    }

    #[test]
    fn syntax_errors_are_malformed() {
        assert!(matches!(
            decode_object::<Sample>(b"{"),
            Err(WorkloadError::MalformedBody(_))
        ));
    }

    #[test]
    fn non_objects_are_invalid_bodies() {
        for (body, kind) in [("[1]", "an array"), ("5", "a number"), (r#""x""#, "a string")] {
            let err = decode_object::<Sample>(body.as_bytes()).unwrap_err();
            assert_eq!(
                err,
                WorkloadError::InvalidBody(format!("expected a JSON object, got {kind}"))
            );
        }
    }

    #[test]
    fn wrong_field_types_are_invalid_bodies() {
        let err = decode_object::<Sample>(br#"{"n":1.5}"#).unwrap_err();
        assert!(matches!(err, WorkloadError::InvalidBody(_)));
        assert!(err.to_string().starts_with("Invalid request body:"));
    }

    #[test]
    fn blank_bodies() {
        assert!(is_blank(b""));
        assert!(is_blank(b" \n\t"));
        assert!(!is_blank(b"{}"));
    }
}
