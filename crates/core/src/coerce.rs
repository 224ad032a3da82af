//! Raw-value extraction: turns untyped JSON values into field primitives.
//!
//! Lax extraction applies the usual form-input coercions (numeric strings,
//! integral floats, `"yes"`/`"no"` booleans). Strict extraction accepts only
//! values that already carry the right JSON kind. Missing keys and `null`
//! are a [`CoreError::FieldType`] for required fields and "unset" for
//! optional ones.

use serde_json::Value;

use crate::error::CoreError;
use crate::types::{ContactDetails, RawRecord};

/// How forgiving extraction is about the JSON kind of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Lax,
    Strict,
}

const EXPECT_TEXT: &str = "a string";
const EXPECT_INTEGER: &str = "a valid integer";
const EXPECT_FLOAT: &str = "a finite number";
const EXPECT_BOOL: &str = "a valid boolean";
const EXPECT_TEXT_LIST: &str = "a list of strings";
const EXPECT_TEXT_MAP: &str = "a mapping of string keys to string values";
const EXPECT_RECORD: &str = "a nested mapping";

fn required<'a>(
    raw: &'a RawRecord,
    field: &'static str,
    expected: &'static str,
) -> Result<&'a Value, CoreError> {
    match raw.get(field) {
        None | Some(Value::Null) => Err(CoreError::FieldType { field, expected }),
        Some(value) => Ok(value),
    }
}

fn optional<'a>(raw: &'a RawRecord, field: &str) -> Option<&'a Value> {
    raw.get(field).filter(|v| !v.is_null())
}

/// Extract a required text field. Non-string values are never coerced.
pub fn text(raw: &RawRecord, field: &'static str) -> Result<String, CoreError> {
    required(raw, field, EXPECT_TEXT)?
        .as_str()
        .map(str::to_string)
        .ok_or(CoreError::FieldType {
            field,
            expected: EXPECT_TEXT,
        })
}

/// Extract a required integer field.
///
/// Accepts JSON integers, floats with no fractional part, and decimal
/// strings such as `"30"`. Booleans are rejected.
pub fn integer(raw: &RawRecord, field: &'static str) -> Result<i64, CoreError> {
    let value = required(raw, field, EXPECT_INTEGER)?;
    integer_value(value).ok_or(CoreError::FieldType {
        field,
        expected: EXPECT_INTEGER,
    })
}

fn integer_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.fract() == 0.0)
                .filter(|f| *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Extract a required float field.
///
/// In [`Mode::Strict`] only JSON numbers are accepted; any other kind is a
/// [`CoreError::FieldConstraint`] so callers can tell a strictness
/// violation from a value that is not numeric at all.
pub fn float(raw: &RawRecord, field: &'static str, mode: Mode) -> Result<f64, CoreError> {
    let value = required(raw, field, EXPECT_FLOAT)?;
    let parsed = match (value, mode) {
        (Value::Number(n), _) => n.as_f64(),
        (Value::String(s), Mode::Lax) => s.trim().parse::<f64>().ok(),
        (_, Mode::Strict) => {
            return Err(CoreError::constraint(
                field,
                format!("must be a number, strict mode rejects {}", kind(value)),
            ))
        }
        _ => None,
    };
    parsed.filter(|f| f.is_finite()).ok_or(CoreError::FieldType {
        field,
        expected: EXPECT_FLOAT,
    })
}

/// Extract an optional boolean field.
pub fn optional_bool(raw: &RawRecord, field: &'static str) -> Result<Option<bool>, CoreError> {
    let Some(value) = optional(raw, field) else {
        return Ok(None);
    };
    let parsed = match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" | "y" | "t" => Some(true),
            "false" | "no" | "off" | "0" | "n" | "f" => Some(false),
            _ => None,
        },
        _ => None,
    };
    parsed.map(Some).ok_or(CoreError::FieldType {
        field,
        expected: EXPECT_BOOL,
    })
}

/// Extract an optional list of strings, preserving order.
pub fn optional_text_list(
    raw: &RawRecord,
    field: &'static str,
) -> Result<Option<Vec<String>>, CoreError> {
    let Some(value) = optional(raw, field) else {
        return Ok(None);
    };
    let err = CoreError::FieldType {
        field,
        expected: EXPECT_TEXT_LIST,
    };
    let items = value.as_array().ok_or_else(|| err.clone())?;
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string).ok_or_else(|| err.clone()))
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// Extract a required mapping of string keys to string values.
pub fn text_map(raw: &RawRecord, field: &'static str) -> Result<ContactDetails, CoreError> {
    let err = CoreError::FieldType {
        field,
        expected: EXPECT_TEXT_MAP,
    };
    let object = required(raw, field, EXPECT_TEXT_MAP)?
        .as_object()
        .ok_or_else(|| err.clone())?;
    object
        .iter()
        .map(|(k, v)| {
            v.as_str()
                .map(|s| (k.clone(), s.to_string()))
                .ok_or_else(|| err.clone())
        })
        .collect()
}

/// Borrow a required nested record.
pub fn record<'a>(raw: &'a RawRecord, field: &'static str) -> Result<&'a RawRecord, CoreError> {
    required(raw, field, EXPECT_RECORD)?
        .as_object()
        .ok_or(CoreError::FieldType {
            field,
            expected: EXPECT_RECORD,
        })
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean input",
        Value::Number(_) => "numeric input",
        Value::String(_) => "string input",
        Value::Array(_) => "list input",
        Value::Object(_) => "mapping input",
    }
}
