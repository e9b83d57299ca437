//! Feature Extraction Error Types

use thiserror::Error;

/// Errors raised by feature extraction setup
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    /// Configuration value outside its allowed range
    #[error("{field} must be {expected}, got {value}")]
    InvalidConfig {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
}
