use std::collections::BTreeMap;
use std::iter::FromIterator;

use ::serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::Failure;

fn serde_failure(code: &str, err: impl ToString) -> Failure {
    Failure::new(err.to_string()).with_context("code", code)
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut ordered = BTreeMap::new();
            for (key, val) in map {
                ordered.insert(key, canonicalize(val));
            }
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => {
            let canonical_values = values.into_iter().map(canonicalize).collect();
            Value::Array(canonical_values)
        }
        other => other,
    }
}

/// Converts a serializable value into the structural value model.
pub fn to_value<T: Serialize>(value: &T) -> Result<Value, Failure> {
    serde_json::to_value(value).map_err(|err| serde_failure("json-encode", err))
}

/// Serializes a value into canonical JSON bytes with deterministic ordering.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, Failure> {
    let value = to_value(value)?;
    let canonical = canonicalize(value);
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonical).map_err(|err| serde_failure("json-write", err))?;
    Ok(bytes)
}

/// Serializes a value into a canonical JSON string with deterministic ordering.
pub fn to_canonical_json_string<T: Serialize>(value: &T) -> Result<String, Failure> {
    let bytes = to_canonical_json_bytes(value)?;
    String::from_utf8(bytes).map_err(|err| serde_failure("json-utf8", err))
}

/// Restores a value from canonical JSON bytes.
pub fn from_json_slice<T: for<'de> Deserialize<'de>>(data: &[u8]) -> Result<T, Failure> {
    serde_json::from_slice(data).map_err(|err| serde_failure("json-read", err))
}

/// Renders a structural value as canonical JSON for inclusion in messages.
///
/// Rendering a [`Value`] cannot fail in practice; a placeholder is substituted
/// rather than propagating an error out of a message-formatting path.
pub fn render(value: &Value) -> String {
    to_canonical_json_string(value).unwrap_or_else(|_| "<unrenderable>".to_string())
}
