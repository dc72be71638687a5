//! Error types for slidekit-core.

use thiserror::Error;

/// Errors raised while building a slider configuration.
///
/// These are construction-time contract violations; a control that was built
/// successfully never produces them afterwards.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `min` is not strictly below `max`.
    #[error("Invalid range: min ({min}) must be less than max ({max})")]
    InvalidRange {
        /// Configured minimum
        min: f64,
        /// Configured maximum
        max: f64,
    },

    /// `step` is zero or negative.
    #[error("Invalid step: {0} (must be greater than zero)")]
    InvalidStep(f64),

    /// A numeric field is NaN or infinite.
    #[error("Non-finite value for '{field}'")]
    NonFinite {
        /// Name of the offending field
        field: &'static str,
    },

    /// A range value pair whose start lies above its end.
    #[error("Unordered range value: start ({start}) is greater than end ({end})")]
    UnorderedPair {
        /// Requested start value
        start: f64,
        /// Requested end value
        end: f64,
    },

    /// A slider descriptor could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Reject NaN and infinities for a named field.
pub fn ensure_finite(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFinite { field })
    }
}
