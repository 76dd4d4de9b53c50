//! Loosely typed numeric column values.

use serde::{Deserialize, Serialize};

/// A numeric column as it sits in storage.
///
/// Archive rows were typed by hand over many seasons, so a score may be a
/// JSON number, a numeric string such as `"112.4"`, or junk text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Interpret the value as a number. NaN, infinities and unparseable text
    /// yield `None`.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            RawValue::Number(n) => *n,
            RawValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        if value.is_finite() {
            Some(value)
        } else {
            None
        }
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Number(n as f64)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

/// Numeric view of an optional column.
pub fn numeric(raw: Option<&RawValue>) -> Option<f64> {
    raw.and_then(RawValue::as_f64)
}
