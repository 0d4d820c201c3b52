//! Error taxonomy shared by every operation.
//!
//! Validation failures carry the index of the first offending element
//! so callers can point at the bad input without re-scanning it.

use thiserror::Error;

/// Result type alias for statistics operations.
pub type Result<T> = std::result::Result<T, MathError>;

/// Errors reported by [`MathUtilities`](crate::MathUtilities) and the
/// dynamic input layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    /// A construction parameter is out of range.
    #[error("{0}")]
    InvalidArgument(String),

    /// An element or argument has the wrong kind (not a number, or not an
    /// integer where one is required).
    #[error("{message}")]
    InvalidType {
        /// Position of the offending element, when the input was a sequence.
        index: Option<usize>,
        /// Human-readable description.
        message: String,
    },

    /// An argument is outside the operation's domain (negative, NaN, infinite).
    #[error("{message}")]
    InvalidValue {
        /// Position of the offending element, when the input was a sequence.
        index: Option<usize>,
        /// Human-readable description.
        message: String,
    },

    /// The sequence has zero elements.
    #[error("Cannot perform calculation on empty sequence")]
    EmptyInput,

    /// The sequence is too short for the requested statistic.
    #[error("{0}")]
    InsufficientData(String),

    /// A result or intermediate computation exceeds a defined ceiling.
    #[error("{0}")]
    Overflow(String),
}

impl MathError {
    pub(crate) fn not_a_number(index: usize, type_name: &str) -> Self {
        Self::InvalidType {
            index: Some(index),
            message: format!("Element at index {index} is not a number: {type_name}"),
        }
    }

    pub(crate) fn integer_required(operation: &str, type_name: &str) -> Self {
        Self::InvalidType {
            index: None,
            message: format!("{operation} requires an integer, got {type_name}"),
        }
    }

    pub(crate) fn nan_at(index: usize) -> Self {
        Self::InvalidValue {
            index: Some(index),
            message: format!("NaN value found at index {index}"),
        }
    }

    pub(crate) fn infinite_at(index: usize) -> Self {
        Self::InvalidValue {
            index: Some(index),
            message: format!("Infinite value found at index {index}"),
        }
    }

    pub(crate) fn invalid_value(message: impl Into<String>) -> Self {
        Self::InvalidValue {
            index: None,
            message: message.into(),
        }
    }

    /// Index of the offending sequence element, if the error names one.
    ///
    /// # Examples
    /// ```
    /// use u_statkit::MathUtilities;
    /// let utils = MathUtilities::default();
    /// let err = utils.mean(&[1.0, 2.0, f64::NAN]).unwrap_err();
    /// assert_eq!(err.index(), Some(2));
    /// ```
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::InvalidType { index, .. } | Self::InvalidValue { index, .. } => *index,
            _ => None,
        }
    }
}
