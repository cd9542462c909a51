use std::fmt;

use serde_json::Value;

/// User-supplied parameters: parameter name mapped to an arbitrary value.
///
/// The map need not cover every declared parameter and may carry names the
/// specification does not declare (those surface as warnings, never errors).
pub type UserParams = serde_json::Map<String, Value>;

/// Runtime tag of a user-supplied value.
///
/// Every incoming value is one of these six kinds; per-type checks dispatch
/// on the tag and error messages name it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Truthiness of a value: null, false, zero, and the empty string count as
/// absent; arrays and objects never do.
///
/// The coordinates presence check is defined in terms of this, which means a
/// `lat`/`lng` of exactly 0 is treated as missing. See the known-quirk test
/// in mapcfg-validate before relying on zero coordinates.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Value equality with numeric awareness: integer and float renderings of
/// the same number compare equal (a YAML `6` matches a JSON `6.0`).
pub fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        _ => a == b,
    }
}
