//! Risk model configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Stopping-distance model parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsRiskConfig {
    /// Reaction time before braking starts (s)
    pub reaction_time_s: f64,

    /// Comfortable braking deceleration (m/s²)
    pub comfort_decel_mps2: f64,

    /// Hard braking deceleration (m/s²)
    pub hard_decel_mps2: f64,

    /// Deceleration above which the emergency flag is raised (m/s²)
    pub emergency_decel_mps2: f64,

    /// Floor applied to distances to avoid division by zero (m)
    pub min_distance_m: f64,
}

impl Default for PhysicsRiskConfig {
    fn default() -> Self {
        Self {
            reaction_time_s: 0.6,
            comfort_decel_mps2: 3.0,
            hard_decel_mps2: 6.0,
            emergency_decel_mps2: 8.0,
            min_distance_m: 0.1,
        }
    }
}

impl PhysicsRiskConfig {
    /// Check that every parameter is strictly positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::require_positive("reaction_time_s", self.reaction_time_s)?;
        ConfigError::require_positive("comfort_decel_mps2", self.comfort_decel_mps2)?;
        ConfigError::require_positive("hard_decel_mps2", self.hard_decel_mps2)?;
        ConfigError::require_positive("emergency_decel_mps2", self.emergency_decel_mps2)?;
        ConfigError::require_positive("min_distance_m", self.min_distance_m)?;
        Ok(())
    }
}

/// Time-to-collision banding thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TtcRiskConfig {
    /// TTC below this is high risk (s)
    pub high_below_s: f64,
    /// TTC below this is medium risk (s)
    pub medium_below_s: f64,
}

impl Default for TtcRiskConfig {
    fn default() -> Self {
        Self {
            high_below_s: 1.5,
            medium_below_s: 3.0,
        }
    }
}

impl TtcRiskConfig {
    /// Check thresholds are positive and ordered
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::require_positive("high_below_s", self.high_below_s)?;
        ConfigError::require_positive("medium_below_s", self.medium_below_s)?;
        if self.medium_below_s < self.high_below_s {
            return Err(ConfigError::OutOfRange {
                field: "medium_below_s",
                value: self.medium_below_s,
                min: self.high_below_s,
                max: f64::INFINITY,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_physics_config_is_valid() {
        assert!(PhysicsRiskConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_decel_rejected() {
        let cfg = PhysicsRiskConfig {
            hard_decel_mps2: 0.0,
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NonPositive {
                field: "hard_decel_mps2",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_nan_reaction_time_rejected() {
        let cfg = PhysicsRiskConfig {
            reaction_time_s: f64::NAN,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_ttc_bands_must_be_ordered() {
        assert!(TtcRiskConfig::default().validate().is_ok());

        let cfg = TtcRiskConfig {
            high_below_s: 4.0,
            medium_below_s: 3.0,
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::OutOfRange { field: "medium_below_s", .. })
        ));
    }
}
