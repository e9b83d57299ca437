//! Configuration Error Types

use thiserror::Error;

/// Errors raised when a configuration value violates its invariant
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Value must be finite and strictly positive
    #[error("{field} must be > 0, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    /// Value out of allowed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl ConfigError {
    /// Check that `value` is finite and strictly positive
    pub fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::NonPositive { field, value })
        }
    }
}
