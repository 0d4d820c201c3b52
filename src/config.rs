//! Construction settings.

use serde::{Deserialize, Serialize};

use crate::error::{MathError, Result};
use crate::utilities::MathUtilities;

/// Decimal places used when no precision is configured.
pub const DEFAULT_PRECISION: i64 = 10;

/// Settings for building a [`MathUtilities`].
///
/// Missing fields fall back to their defaults, so `{}` is a valid config.
///
/// # Examples
/// ```
/// use u_statkit::MathConfig;
/// let cfg = MathConfig::from_json_str(r#"{"precision": 4}"#).unwrap();
/// assert_eq!(cfg.into_utilities().unwrap().precision(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MathConfig {
    /// Decimal places for rounding float results. Must be non-negative.
    pub precision: i64,
}

impl Default for MathConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl MathConfig {
    /// Parses a config from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| MathError::InvalidArgument(format!("Invalid configuration: {e}")))
    }

    /// Builds the utilities, validating the precision.
    pub fn into_utilities(self) -> Result<MathUtilities> {
        MathUtilities::new(self.precision)
    }
}
