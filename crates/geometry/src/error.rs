//! Geometry Error Types

use thiserror::Error;

/// Errors raised by geometry helpers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Orientation quaternion cannot be normalized
    #[error("Invalid orientation quaternion (norm {norm})")]
    InvalidOrientation { norm: f64 },
}
