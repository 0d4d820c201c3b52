//! Precondition checks run before any computation.

use crate::error::{MathError, Result};
use crate::number::Number;

/// Checks that `numbers` is non-empty and every element is finite.
///
/// Returns the error for the first offending element. Non-numeric input
/// cannot reach this point; it is rejected while converting to [`Number`]
/// (see [`numbers_from_json`](crate::number::numbers_from_json)).
///
/// # Examples
/// ```
/// use u_statkit::{Number, MathError};
/// use u_statkit::validate::validate_sequence;
/// assert!(validate_sequence(&[Number::Int(1), Number::Float(2.0)]).is_ok());
/// assert_eq!(validate_sequence(&[]), Err(MathError::EmptyInput));
/// ```
pub fn validate_sequence(numbers: &[Number]) -> Result<()> {
    if numbers.is_empty() {
        return Err(MathError::EmptyInput);
    }
    for (i, n) in numbers.iter().enumerate() {
        if let Number::Float(x) = *n {
            if x.is_nan() {
                return Err(MathError::nan_at(i));
            }
            if x.is_infinite() {
                return Err(MathError::infinite_at(i));
            }
        }
    }
    Ok(())
}
