//! Ego state and raw object input

use geometry::Position2D;
use serde::{Deserialize, Serialize};

/// Ego pose at one sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EgoState {
    pub position: Position2D,
    /// Heading in the scene frame (radians)
    pub yaw_rad: f64,
    /// Sample timestamp (microseconds)
    pub timestamp_us: i64,
}

impl EgoState {
    pub fn new(position: Position2D, yaw_rad: f64, timestamp_us: i64) -> Self {
        Self {
            position,
            yaw_rad,
            timestamp_us,
        }
    }
}

/// Annotated object as delivered by the dataset source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawObject {
    /// Fine-grained category name, e.g. `vehicle.car`
    pub category: String,
    pub position: Position2D,
}

impl RawObject {
    pub fn new(category: impl Into<String>, position: Position2D) -> Self {
        Self {
            category: category.into(),
            position,
        }
    }
}
