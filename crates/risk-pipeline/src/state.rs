//! Driving state snapshots

use physics_risk::{PhysicsRiskAssessment, RiskLevel, TtcRiskAssessment};
use scene_features::FrameFeatures;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ego summary for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EgoSummary {
    pub speed_mps: Option<f64>,
    pub yaw_deg: f64,
}

/// Complete per-frame assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrivingState {
    pub scene: String,
    pub timestamp_us: i64,
    pub ego: EgoSummary,
    pub features: FrameFeatures,
    pub risk_ttc: TtcRiskAssessment,
    pub risk_physics: PhysicsRiskAssessment,
}

impl DrivingState {
    /// Flattened authoritative view of this state's risk
    pub fn state_risk(&self) -> StateRisk {
        StateRisk {
            risk_level_ttc: self.risk_ttc.level,
            min_ttc_s: self.risk_ttc.min_ttc_s,
            risk_level_physics: self.risk_physics.level,
            closest_front_object_m: self.risk_physics.closest_front_object_m,
            required_deceleration_mps2: self.risk_physics.required_deceleration_mps2,
        }
    }
}

/// Risk values a reasoner may cite as evidence
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StateRisk {
    pub risk_level_ttc: RiskLevel,
    pub min_ttc_s: Option<f64>,
    pub risk_level_physics: RiskLevel,
    pub closest_front_object_m: Option<f64>,
    pub required_deceleration_mps2: Option<f64>,
}

impl StateRisk {
    /// Key/value form used as ground truth for evidence checks
    pub fn to_evidence_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(
            "risk_level_ttc".to_string(),
            Value::from(self.risk_level_ttc.as_str()),
        );
        map.insert("min_ttc_s".to_string(), optional(self.min_ttc_s));
        map.insert(
            "risk_level_physics".to_string(),
            Value::from(self.risk_level_physics.as_str()),
        );
        map.insert(
            "closest_front_object_m".to_string(),
            optional(self.closest_front_object_m),
        );
        map.insert(
            "required_deceleration_mps2".to_string(),
            optional(self.required_deceleration_mps2),
        );
        map
    }
}

fn optional(value: Option<f64>) -> Value {
    value.map_or(Value::Null, Value::from)
}
