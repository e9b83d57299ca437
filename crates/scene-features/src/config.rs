//! Feature extraction configuration

use crate::error::FeatureError;
use serde::{Deserialize, Serialize};

/// Feature extraction configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Half-angle of the front cone around ego heading (degrees)
    pub front_cone_half_angle_deg: f64,

    /// Objects further than this are ignored (meters)
    pub max_distance_m: f64,

    /// Closing speed below which TTC is not computed (m/s)
    pub closing_speed_threshold_mps: f64,

    /// Number of nearest objects exposed on the frame
    pub max_reported_objects: usize,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            front_cone_half_angle_deg: 35.0,
            max_distance_m: 60.0,
            closing_speed_threshold_mps: 0.1,
            max_reported_objects: 30,
        }
    }
}

impl FeatureConfig {
    /// Check the cone and distance limits
    pub fn validate(&self) -> Result<(), FeatureError> {
        let cone = self.front_cone_half_angle_deg;
        if !(cone > 0.0 && cone <= 180.0) {
            return Err(FeatureError::InvalidConfig {
                field: "front_cone_half_angle_deg",
                value: cone,
                expected: "in (0, 180]",
            });
        }
        if !(self.max_distance_m > 0.0 && self.max_distance_m.is_finite()) {
            return Err(FeatureError::InvalidConfig {
                field: "max_distance_m",
                value: self.max_distance_m,
                expected: "finite and > 0",
            });
        }
        if !(self.closing_speed_threshold_mps >= 0.0 && self.closing_speed_threshold_mps.is_finite()) {
            return Err(FeatureError::InvalidConfig {
                field: "closing_speed_threshold_mps",
                value: self.closing_speed_threshold_mps,
                expected: "finite and >= 0",
            });
        }
        Ok(())
    }
}
