//! Aggregate statistics record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::number::Number;

/// Descriptive statistics produced by one
/// [`MathUtilities::statistics`](crate::MathUtilities::statistics) call.
///
/// `variance` is always `std_dev²` of the *sample* standard deviation.
/// Serializes with the keys `mean`, `median`, `mode`, `standard_deviation`,
/// `variance`, `minimum`, `maximum` and `count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticalResult {
    pub mean: f64,
    pub median: Number,
    pub mode: Option<Number>,
    #[serde(rename = "standard_deviation")]
    pub std_dev: f64,
    pub variance: f64,
    #[serde(rename = "minimum")]
    pub min_value: Number,
    #[serde(rename = "maximum")]
    pub max_value: Number,
    pub count: usize,
}

impl StatisticalResult {
    /// Returns the record as a JSON object.
    pub fn to_json(&self) -> Value {
        // A struct of plain numbers always serializes.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
