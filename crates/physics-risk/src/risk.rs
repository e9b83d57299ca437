//! Stopping-distance risk computation

use crate::config::PhysicsRiskConfig;
use crate::level::RiskLevel;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Lower bound on deceleration used by [`braking_distance`] (m/s²)
const MIN_DECEL_MPS2: f64 = 1e-6;

const REASON_MISSING_INPUT: &str = "missing input";
const REASON_HARD_STOP_EXCEEDS: &str = "stopping distance (hard) exceeds available distance";
const REASON_DECEL_ABOVE_HARD: &str = "required deceleration exceeds hard braking threshold";
const REASON_DECEL_ABOVE_COMFORT: &str = "requires stronger-than-comfort braking";
const REASON_COMFORT_OK: &str = "comfort braking sufficient";

/// Physics-based risk snapshot for one frame.
///
/// Numeric fields are `None` only when the level is [`RiskLevel::Unknown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsRiskAssessment {
    /// Distance to the closest in-front object, after clamping (m)
    pub closest_front_object_m: Option<f64>,
    /// Ego speed, after clamping (m/s)
    pub ego_speed_mps: Option<f64>,
    pub reaction_time_s: Option<f64>,
    /// Distance covered during the reaction time (m)
    pub reaction_distance_m: Option<f64>,
    pub braking_distance_comfort_m: Option<f64>,
    pub braking_distance_hard_m: Option<f64>,
    /// Reaction plus comfort braking distance (m)
    pub stopping_distance_comfort_m: Option<f64>,
    /// Reaction plus hard braking distance (m)
    pub stopping_distance_hard_m: Option<f64>,
    /// Available distance minus hard stopping distance; negative is infeasible (m)
    pub collision_margin_hard_m: Option<f64>,
    /// Deceleration needed to stop within the distance left after reacting (m/s²)
    pub required_deceleration_mps2: Option<f64>,
    /// Required deceleration exceeds the emergency threshold
    pub emergency_decel_flag: bool,
    pub level: RiskLevel,
    pub reason: String,
}

impl PhysicsRiskAssessment {
    fn unknown() -> Self {
        Self {
            closest_front_object_m: None,
            ego_speed_mps: None,
            reaction_time_s: None,
            reaction_distance_m: None,
            braking_distance_comfort_m: None,
            braking_distance_hard_m: None,
            stopping_distance_comfort_m: None,
            stopping_distance_hard_m: None,
            collision_margin_hard_m: None,
            required_deceleration_mps2: None,
            emergency_decel_flag: false,
            level: RiskLevel::Unknown,
            reason: REASON_MISSING_INPUT.to_string(),
        }
    }
}

/// Distance to stop from `v_mps` at constant deceleration `decel_mps2`: v² / 2a
pub fn braking_distance(v_mps: f64, decel_mps2: f64) -> f64 {
    (v_mps * v_mps) / (2.0 * decel_mps2.max(MIN_DECEL_MPS2))
}

/// Classify forward collision risk.
///
/// Returns a [`RiskLevel::Unknown`] assessment if either input is absent.
/// Rules are evaluated in priority order, first match wins:
///
/// 1. hard stopping distance exceeds the available distance: high
/// 2. required deceleration above the hard threshold: high
/// 3. required deceleration above the comfort threshold: medium
/// 4. otherwise: low
pub fn compute_physics_risk(
    ego_speed_mps: Option<f64>,
    closest_front_m: Option<f64>,
    cfg: &PhysicsRiskConfig,
) -> PhysicsRiskAssessment {
    let (Some(speed), Some(dist)) = (ego_speed_mps, closest_front_m) else {
        return PhysicsRiskAssessment::unknown();
    };

    let v = speed.max(0.0);
    let d = dist.max(cfg.min_distance_m);

    let reaction_dist = v * cfg.reaction_time_s;
    let brake_comfort = braking_distance(v, cfg.comfort_decel_mps2);
    let brake_hard = braking_distance(v, cfg.hard_decel_mps2);
    let stop_comfort = reaction_dist + brake_comfort;
    let stop_hard = reaction_dist + brake_hard;

    let remaining = (d - reaction_dist).max(cfg.min_distance_m);
    let required_decel = (v * v) / (2.0 * remaining);
    let margin_hard = d - stop_hard;

    let (level, reason) = if margin_hard < 0.0 {
        (RiskLevel::High, REASON_HARD_STOP_EXCEEDS)
    } else if required_decel > cfg.hard_decel_mps2 {
        (RiskLevel::High, REASON_DECEL_ABOVE_HARD)
    } else if required_decel > cfg.comfort_decel_mps2 {
        (RiskLevel::Medium, REASON_DECEL_ABOVE_COMFORT)
    } else {
        (RiskLevel::Low, REASON_COMFORT_OK)
    };

    let emergency = required_decel > cfg.emergency_decel_mps2;

    debug!(
        "Physics risk: v={:.2} d={:.2} required_decel={:.2} margin={:.2} -> {}",
        v, d, required_decel, margin_hard, level
    );

    PhysicsRiskAssessment {
        closest_front_object_m: Some(d),
        ego_speed_mps: Some(v),
        reaction_time_s: Some(cfg.reaction_time_s),
        reaction_distance_m: Some(reaction_dist),
        braking_distance_comfort_m: Some(brake_comfort),
        braking_distance_hard_m: Some(brake_hard),
        stopping_distance_comfort_m: Some(stop_comfort),
        stopping_distance_hard_m: Some(stop_hard),
        collision_margin_hard_m: Some(margin_hard),
        required_deceleration_mps2: Some(required_decel),
        emergency_decel_flag: emergency,
        level,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(actual: Option<f64>, expected: f64, tol: f64) -> bool {
        actual.map_or(false, |a| (a - expected).abs() < tol)
    }

    #[test]
    fn test_missing_inputs_are_unknown() {
        let cfg = PhysicsRiskConfig::default();
        for (v, d) in [(None, Some(10.0)), (Some(10.0), None), (None, None)] {
            let risk = compute_physics_risk(v, d, &cfg);
            assert_eq!(risk.level, RiskLevel::Unknown);
            assert_eq!(risk.reason, "missing input");
            assert!(risk.required_deceleration_mps2.is_none());
            assert!(risk.collision_margin_hard_m.is_none());
            assert!(risk.reaction_time_s.is_none());
            assert!(!risk.emergency_decel_flag);
        }
    }

    #[test]
    fn test_highway_closing_scenario() {
        let risk = compute_physics_risk(Some(20.0), Some(40.0), &PhysicsRiskConfig::default());

        assert!(close(risk.reaction_distance_m, 12.0, 1e-9));
        assert!(close(risk.stopping_distance_hard_m, 45.33, 0.01));
        assert!(close(risk.collision_margin_hard_m, -5.33, 0.01));
        assert!(close(risk.required_deceleration_mps2, 7.14, 0.01));
        assert_eq!(risk.level, RiskLevel::High);
        assert_eq!(risk.reason, "stopping distance (hard) exceeds available distance");
        assert!(!risk.emergency_decel_flag);
    }

    #[test]
    fn test_slow_far_scenario() {
        let risk = compute_physics_risk(Some(5.0), Some(50.0), &PhysicsRiskConfig::default());

        assert!(close(risk.required_deceleration_mps2, 0.27, 0.01));
        assert!(close(risk.collision_margin_hard_m, 44.92, 0.01));
        assert_eq!(risk.level, RiskLevel::Low);
        assert_eq!(risk.reason, "comfort braking sufficient");
    }

    #[test]
    fn test_infeasibility_dominates_decel_rule() {
        // Both rule 1 and rule 2 hold; the reason must come from rule 1
        let risk = compute_physics_risk(Some(30.0), Some(20.0), &PhysicsRiskConfig::default());
        assert!(risk.collision_margin_hard_m.unwrap() < 0.0);
        assert!(risk.required_deceleration_mps2.unwrap() > 6.0);
        assert_eq!(risk.reason, "stopping distance (hard) exceeds available distance");
        assert!(risk.emergency_decel_flag);
    }

    #[test]
    fn test_medium_band() {
        // v=10: reaction 6, hard stop 6 + 8.33 = 14.33; d=20 -> margin 5.67
        // remaining 14 -> required 100/28 = 3.57 -> medium
        let risk = compute_physics_risk(Some(10.0), Some(20.0), &PhysicsRiskConfig::default());
        assert_eq!(risk.level, RiskLevel::Medium);
        assert!(close(risk.required_deceleration_mps2, 3.57, 0.01));
    }

    #[test]
    fn test_negative_speed_clamped() {
        let risk = compute_physics_risk(Some(-3.0), Some(10.0), &PhysicsRiskConfig::default());
        assert_eq!(risk.ego_speed_mps, Some(0.0));
        assert_eq!(risk.required_deceleration_mps2, Some(0.0));
        assert_eq!(risk.level, RiskLevel::Low);
    }

    #[test]
    fn test_zero_distance_clamped() {
        let risk = compute_physics_risk(Some(1.0), Some(0.0), &PhysicsRiskConfig::default());
        assert_eq!(risk.closest_front_object_m, Some(0.1));
        let decel = risk.required_deceleration_mps2.unwrap();
        assert!(decel.is_finite());
        assert!((decel - 5.0).abs() < 1e-9);
        assert_eq!(risk.level, RiskLevel::High);
    }

    #[test]
    fn test_braking_distance_values() {
        assert!((braking_distance(20.0, 6.0) - 33.333).abs() < 0.001);
        assert_eq!(braking_distance(0.0, 3.0), 0.0);
        assert!(braking_distance(10.0, 0.0).is_finite());
    }

    proptest! {
        #[test]
        fn prop_braking_distance_monotonic_in_speed(
            v in 0.0f64..100.0,
            dv in 0.0f64..50.0,
            a in 0.1f64..20.0,
        ) {
            prop_assert!(braking_distance(v + dv, a) >= braking_distance(v, a));
        }

        #[test]
        fn prop_braking_distance_non_increasing_in_decel(
            v in 0.0f64..100.0,
            a in 0.1f64..20.0,
            da in 0.0f64..20.0,
        ) {
            prop_assert!(braking_distance(v, a + da) <= braking_distance(v, a));
        }

        #[test]
        fn prop_stationary_ego_is_low(d in 0.001f64..1000.0) {
            let risk = compute_physics_risk(Some(0.0), Some(d), &PhysicsRiskConfig::default());
            prop_assert_eq!(risk.level, RiskLevel::Low);
            prop_assert_eq!(risk.required_deceleration_mps2, Some(0.0));
        }

        #[test]
        fn prop_known_inputs_never_unknown(v in -50.0f64..80.0, d in -10.0f64..500.0) {
            let risk = compute_physics_risk(Some(v), Some(d), &PhysicsRiskConfig::default());
            prop_assert_ne!(risk.level, RiskLevel::Unknown);
            prop_assert!(!risk.reason.is_empty());
            prop_assert!(risk.required_deceleration_mps2.unwrap() >= 0.0);
        }
    }
}
