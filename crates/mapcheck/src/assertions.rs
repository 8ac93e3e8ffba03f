use serde::Serialize;
use serde_json::Value;

use crate::errors::Failure;
use crate::policies::Policy;
use crate::serde::{render, to_value};

/// Message prefix applied when [`close`] is called without one.
const NOT_CLOSE: &str = "Not close:";

/// Fails with the provided message when the condition does not hold.
///
/// This is the sole point where control leaves normal flow; every other
/// helper bottoms out here or constructs a [`Failure`] directly. An empty
/// message is replaced by the `"(unspecified)"` placeholder.
pub fn ensure(condition: bool, message: impl Into<String>) -> Result<(), Failure> {
    if condition {
        Ok(())
    } else {
        Err(Failure::new(message))
    }
}

fn mismatch(actual: &Value, expected: &Value, message: &str) -> Failure {
    Failure::new(format!(
        "{message}\n  actual = {}\n  expected = {}",
        render(actual),
        render(expected)
    ))
}

/// Asserts structural deep equality between two serializable values.
///
/// Mapping comparison is independent of key insertion order. On mismatch the
/// failure message carries a canonical JSON rendering of both operands so the
/// message is diffable.
pub fn equal<A, B>(actual: &A, expected: &B, message: &str) -> Result<(), Failure>
where
    A: Serialize,
    B: Serialize,
{
    let actual = to_value(actual)?;
    let expected = to_value(expected)?;
    equal_values(&actual, &expected, message)
}

/// Asserts structural equality between two values already in the value model.
pub fn equal_values(actual: &Value, expected: &Value, message: &str) -> Result<(), Failure> {
    if actual == expected {
        Ok(())
    } else {
        Err(mismatch(actual, expected, message))
    }
}

/// Asserts approximate equality under the default [`Policy`].
pub fn close<A, B>(x: &A, y: &B, message: &str) -> Result<(), Failure>
where
    A: Serialize,
    B: Serialize,
{
    close_with(x, y, message, &Policy::default())
}

/// Asserts approximate equality under an explicit tolerance policy.
pub fn close_with<A, B>(x: &A, y: &B, message: &str, policy: &Policy) -> Result<(), Failure>
where
    A: Serialize,
    B: Serialize,
{
    let x = to_value(x)?;
    let y = to_value(y)?;
    close_values(&x, &y, message, policy)
}

fn category(value: &Value) -> &'static str {
    match value {
        Value::Number(_) => "number",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
        Value::Bool(_) => "boolean",
        Value::String(_) => "string",
        Value::Null => "null",
    }
}

/// Recursively compares two structural values with absolute tolerance.
///
/// Numbers pass when they differ by less than the policy tolerance. Sequences
/// must agree in length and mappings in key set before elements are compared
/// pairwise; nested failures carry a `[index]` or `[key]` breadcrumb path
/// pinpointing where the divergence occurred. Booleans, strings, and nulls
/// fall back to exact equality.
pub fn close_values(x: &Value, y: &Value, message: &str, policy: &Policy) -> Result<(), Failure> {
    let message = if message.is_empty() { NOT_CLOSE } else { message };
    equal(
        &category(x),
        &category(y),
        &format!("{message} types differ"),
    )?;
    match (x, y) {
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(actual), Some(expected)) => {
                if (actual - expected).abs() < policy.abs_tol {
                    Ok(())
                } else {
                    Err(mismatch(x, y, message))
                }
            }
            _ => equal_values(x, y, message),
        },
        (Value::Array(a), Value::Array(b)) => {
            equal(&a.len(), &b.len(), &format!("{message} lengths differ"))?;
            for (pos, (actual, expected)) in a.iter().zip(b.iter()).enumerate() {
                close_values(actual, expected, &format!("{message} [{pos}]"), policy)?;
            }
            Ok(())
        }
        (Value::Object(a), Value::Object(b)) => {
            let mut x_keys: Vec<&str> = a.keys().map(String::as_str).collect();
            let mut y_keys: Vec<&str> = b.keys().map(String::as_str).collect();
            x_keys.sort_unstable();
            y_keys.sort_unstable();
            equal(&x_keys, &y_keys, &format!("{message} keys differ"))?;
            for key in x_keys {
                if let (Some(actual), Some(expected)) = (a.get(key), b.get(key)) {
                    close_values(actual, expected, &format!("{message} [{key}]"), policy)?;
                }
            }
            Ok(())
        }
        _ => equal_values(x, y, message),
    }
}
