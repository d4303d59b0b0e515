//! JSON output checks

use serde_json::{Map, Value};
use tableproof_core::{VerifyError, VerifyResult};

fn parse<T: serde::de::DeserializeOwned>(output: &str) -> VerifyResult<T> {
    serde_json::from_str(output).or_else(|e| {
        VerifyError::InvalidJson {
            reason: format!("{e}; output: {output}"),
        }
        .reject()
    })
}

/// Assert the JSON object has `key`, or that some object in the JSON array does.
pub fn verify_json_contains_key(output: &str, key: &str) -> VerifyResult<()> {
    let found = match parse::<Value>(output)? {
        Value::Array(items) => items
            .iter()
            .any(|item| item.as_object().is_some_and(|obj| obj.contains_key(key))),
        Value::Object(obj) => obj.contains_key(key),
        _ => {
            return VerifyError::JsonShape {
                expected: "an array or object".to_string(),
                output: output.to_string(),
            }
            .reject()
        }
    };

    if !found {
        return VerifyError::MissingJsonKey {
            key: key.to_string(),
        }
        .reject();
    }
    Ok(())
}

pub fn verify_json_array_length(output: &str, expected: usize) -> VerifyResult<()> {
    let items: Vec<Value> = parse(output)?;
    if items.len() != expected {
        return VerifyError::JsonLengthMismatch {
            expected,
            actual: items.len(),
        }
        .reject();
    }
    Ok(())
}

pub fn verify_json_array_min_length(output: &str, min: usize) -> VerifyResult<()> {
    let items: Vec<Value> = parse(output)?;
    if items.len() < min {
        return VerifyError::JsonTooShort {
            min,
            actual: items.len(),
        }
        .reject();
    }
    Ok(())
}

/// Assert some object in the JSON array has `key` equal to `value`.
///
/// Strings match verbatim. Numbers match when `value` parses to the same
/// number, so `"42"` finds both `"42"` and `42`.
pub fn verify_json_array_contains_value(output: &str, key: &str, value: &str) -> VerifyResult<()> {
    let items: Vec<Map<String, Value>> = parse(output)?;
    let wanted_number = value.parse::<f64>().ok();

    let found = items.iter().any(|item| match item.get(key) {
        Some(Value::String(s)) => s == value,
        Some(Value::Number(n)) => wanted_number.is_some() && n.as_f64() == wanted_number,
        _ => false,
    });

    if !found {
        return VerifyError::MissingJsonValue {
            key: key.to_string(),
            value: value.to_string(),
        }
        .reject();
    }
    Ok(())
}
