//! Dynamic numeric values.
//!
//! [`Number`] keeps the integer/float distinction of the input so that
//! integer sums stay exact and integer-only operations can reject floats.
//! Untyped input (JSON) is converted here, which is the only place a
//! non-numeric element can be detected.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{MathError, Result};

/// A single integer or floating-point value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// Exact integer.
    Int(i64),
    /// IEEE-754 double.
    Float(f64),
}

impl Number {
    /// Returns the value as `f64` (lossy for integers beyond 2⁵³).
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(x) => x,
        }
    }

    /// `true` for integers and for floats that are neither NaN nor infinite.
    pub fn is_finite(self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Float(x) => x.is_finite(),
        }
    }

    /// `true` if this is the integer variant.
    pub fn is_integer(self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// Name of the runtime kind, used in error messages.
    pub fn type_name(self) -> &'static str {
        match self {
            Number::Int(_) => "int",
            Number::Float(_) => "float",
        }
    }

    /// Extracts the integer, failing with [`MathError::InvalidType`] for floats.
    ///
    /// `operation` names the caller in the message, e.g. `"Factorial"`.
    ///
    /// # Examples
    /// ```
    /// use u_statkit::Number;
    /// assert_eq!(Number::Int(7).as_integer("Prime check"), Ok(7));
    /// assert!(Number::Float(7.0).as_integer("Prime check").is_err());
    /// ```
    pub fn as_integer(self, operation: &str) -> Result<i64> {
        match self {
            Number::Int(i) => Ok(i),
            Number::Float(_) => Err(MathError::integer_required(operation, self.type_name())),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            // Debug formatting keeps the trailing ".0" on integral floats.
            Number::Float(x) => write!(f, "{x:?}"),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(i64::from(value))
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Int(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(f64::from(value))
    }
}

/// Result of summing a sequence.
///
/// Integer totals are held in `i128`, which cannot overflow for any
/// sequence of `i64` values that fits in memory, so an all-integer sum is
/// always exact even when it leaves the `i64` range.
///
/// # Examples
/// ```
/// use u_statkit::{MathUtilities, number::Total};
/// let total = MathUtilities::default().sum(&[i64::MAX, 1]).unwrap();
/// assert_eq!(total, Total::Int(i128::from(i64::MAX) + 1));
/// assert_eq!(total.to_string(), "9223372036854775808");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Total {
    /// Exact sum of integers.
    Int(i128),
    /// Sum involving at least one float.
    Float(f64),
}

impl Total {
    /// Returns the total as `f64` (lossy for integers beyond 2⁵³).
    pub fn as_f64(self) -> f64 {
        match self {
            Total::Int(i) => i as f64,
            Total::Float(x) => x,
        }
    }
}

impl fmt::Display for Total {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Total::Int(i) => write!(f, "{i}"),
            Total::Float(x) => write!(f, "{x:?}"),
        }
    }
}

impl From<Number> for Total {
    fn from(value: Number) -> Self {
        match value {
            Number::Int(i) => Total::Int(i128::from(i)),
            Number::Float(x) => Total::Float(x),
        }
    }
}

impl TryFrom<&Value> for Number {
    type Error = MathError;

    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Number::Int(i))
                } else if let Some(x) = n.as_f64() {
                    Ok(Number::Float(x))
                } else {
                    Err(MathError::InvalidType {
                        index: None,
                        message: format!("Unrepresentable number: {n}"),
                    })
                }
            }
            other => Err(MathError::InvalidType {
                index: None,
                message: format!("Expected a number, got {}", json_type_name(other)),
            }),
        }
    }
}

/// Name used for a JSON value's kind in error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

/// Converts a slice of JSON values into numbers.
///
/// Fails with [`MathError::InvalidType`] at the first non-numeric element,
/// reporting its index.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use u_statkit::number::numbers_from_json;
/// let values = [json!(1), json!(2.5), json!("three")];
/// let err = numbers_from_json(&values).unwrap_err();
/// assert_eq!(err.index(), Some(2));
/// ```
pub fn numbers_from_json(values: &[Value]) -> Result<Vec<Number>> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| Number::try_from(v).map_err(|_| MathError::not_a_number(i, json_type_name(v))))
        .collect()
}

/// Parses a JSON array literal such as `"[1, 2.5, 3]"` into numbers.
///
/// Malformed JSON is an [`MathError::InvalidArgument`]; a JSON value that
/// is not an array is an [`MathError::InvalidType`].
pub fn parse_numbers(input: &str) -> Result<Vec<Number>> {
    let value: Value = serde_json::from_str(input)
        .map_err(|e| MathError::InvalidArgument(format!("Malformed JSON input: {e}")))?;
    match value {
        Value::Array(items) => numbers_from_json(&items),
        other => Err(MathError::InvalidType {
            index: None,
            message: format!(
                "Expected a JSON array of numbers, got {}",
                json_type_name(&other)
            ),
        }),
    }
}

/// Parses a single JSON scalar such as `"5"` or `"5.5"` into a number.
pub fn parse_number(input: &str) -> Result<Number> {
    let value: Value = serde_json::from_str(input)
        .map_err(|e| MathError::InvalidArgument(format!("Malformed JSON input: {e}")))?;
    Number::try_from(&value)
}
