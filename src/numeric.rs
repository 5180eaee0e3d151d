//! Sums over numeric lists.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A list element that is either an integer or a float.
///
/// Deserializes from a bare JSON number, so `[1, 2, 3.5]` decodes into
/// `Vec<Number>` with the first two as `Int`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Widen to `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

/// Sum a list of integers and floats as `f64`.
///
/// The accumulator starts at `0.0`, so an empty or all-integer list still
/// yields a float.
///
/// ```rust
/// use ghorg::{sum_mixed_list, Number};
///
/// let values = [Number::from(1), Number::from(2), Number::from(3.5)];
/// assert_eq!(sum_mixed_list(&values), 6.5);
/// ```
#[must_use]
pub fn sum_mixed_list(values: &[Number]) -> f64 {
    values.iter().fold(0.0, |acc, n| acc + n.as_f64())
}

/// Sum a list of floats.
#[must_use]
pub fn sum_list(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc, x| acc + x)
}
