//! Record normalization: turn optional, loosely typed columns into numbers.

use crate::models::RawValue;

/// Value substituted for an absent or non-numeric column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Neutral for sums and maximums
    Zero,
    /// Sorts last when the column is being minimized
    Infinity,
}

impl Fallback {
    pub fn for_min(is_min: bool) -> Self {
        if is_min {
            Fallback::Infinity
        } else {
            Fallback::Zero
        }
    }

    pub fn value(self) -> f64 {
        match self {
            Fallback::Zero => 0.0,
            Fallback::Infinity => f64::INFINITY,
        }
    }
}

/// Numeric value of a column, or the fallback.
pub fn normalize(raw: Option<&RawValue>, fallback: Fallback) -> f64 {
    raw.and_then(RawValue::as_f64)
        .unwrap_or_else(|| fallback.value())
}

/// Largest tally a single row may contribute. Sums of many rows stay far
/// below `i64::MAX`.
const MAX_COUNT: f64 = i32::MAX as f64;

/// Integer tally column; fractions are truncated, anything else counts as 0.
/// Values beyond the `i32` range are clamped.
pub fn normalize_count(raw: Option<&RawValue>) -> i64 {
    raw.and_then(RawValue::as_f64)
        .map(|v| v.trunc().clamp(-MAX_COUNT, MAX_COUNT) as i64)
        .unwrap_or(0)
}
