//! Per-scene fold

use crate::error::PipelineError;
use crate::settings::EngineSettings;
use crate::state::{DrivingState, EgoSummary};
use geometry::{Position2D, Quaternion};
use metrics::counter;
use physics_risk::{assess_ttc_risk, compute_physics_risk, PhysicsRiskConfig, TtcRiskConfig};
use scene_features::{EgoState, FrameFeatureExtractor, RawObject};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// One dataset sample as delivered by the source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp_us: i64,
    pub ego_position: Position2D,
    pub ego_orientation: Quaternion,
    pub annotations: Vec<RawObject>,
}

/// Frame dropped from a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedFrame {
    pub timestamp_us: i64,
    pub reason: String,
}

/// Result of folding one scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneReport {
    pub scene: String,
    pub states: Vec<DrivingState>,
    pub skipped: Vec<SkippedFrame>,
}

/// Validated, immutable risk engine shared by all scenes
#[derive(Debug, Clone)]
pub struct RiskEngine {
    extractor: FrameFeatureExtractor,
    physics: PhysicsRiskConfig,
    ttc: TtcRiskConfig,
}

impl RiskEngine {
    /// Build an engine from validated settings
    pub fn new(settings: &EngineSettings) -> Result<Self, PipelineError> {
        settings.validate()?;
        Ok(Self {
            extractor: FrameFeatureExtractor::new(settings.features, settings.categories.clone()),
            physics: settings.physics,
            ttc: settings.ttc,
        })
    }

    /// Start a fold over one scene's samples
    pub fn scene(&self, name: impl Into<String>) -> SceneProcessor<'_> {
        SceneProcessor {
            engine: self,
            scene: name.into(),
            prev: None,
        }
    }

    /// Fold a whole scene; samples must be in temporal order
    pub fn process_scene<'s>(
        &self,
        name: impl Into<String>,
        samples: impl IntoIterator<Item = &'s Sample>,
    ) -> SceneReport {
        let mut processor = self.scene(name);
        let mut states = Vec::new();
        let mut skipped = Vec::new();

        for sample in samples {
            match processor.step(sample) {
                Ok(state) => states.push(state),
                Err(e) => {
                    warn!(
                        "Scene {}: skipping frame {}: {}",
                        processor.scene, sample.timestamp_us, e
                    );
                    counter!("risk_pipeline_frames_skipped_total").increment(1);
                    skipped.push(SkippedFrame {
                        timestamp_us: sample.timestamp_us,
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Scene {} complete: {} states, {} skipped",
            processor.scene,
            states.len(),
            skipped.len()
        );

        SceneReport {
            scene: processor.scene,
            states,
            skipped,
        }
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self {
            extractor: FrameFeatureExtractor::default(),
            physics: PhysicsRiskConfig::default(),
            ttc: TtcRiskConfig::default(),
        }
    }
}

/// Fold state for one scene: the previous ego observation
#[derive(Debug)]
pub struct SceneProcessor<'a> {
    engine: &'a RiskEngine,
    scene: String,
    prev: Option<EgoState>,
}

impl SceneProcessor<'_> {
    pub fn scene(&self) -> &str {
        &self.scene
    }

    /// Assess the next sample.
    ///
    /// The previous-frame state advances even when this frame fails, so a
    /// malformed orientation only affects its own frame.
    pub fn step(&mut self, sample: &Sample) -> Result<DrivingState, PipelineError> {
        let yaw = geometry::yaw(&sample.ego_orientation);
        // Previous heading is never read by the extractor
        let prev_yaw = yaw.as_ref().copied().unwrap_or(0.0);
        let prev = self.prev.replace(EgoState::new(
            sample.ego_position,
            prev_yaw,
            sample.timestamp_us,
        ));
        let yaw_rad = yaw?;

        let curr = EgoState::new(sample.ego_position, yaw_rad, sample.timestamp_us);
        let features = self
            .engine
            .extractor
            .extract(prev.as_ref(), &curr, &sample.annotations);

        let risk_physics = compute_physics_risk(
            features.ego_speed_mps,
            features.closest_front_object_m,
            &self.engine.physics,
        );
        let risk_ttc = assess_ttc_risk(features.min_ttc_s, &self.engine.ttc);

        counter!("risk_pipeline_frames_total").increment(1);
        counter!("risk_pipeline_physics_level_total", "level" => risk_physics.level.as_str())
            .increment(1);

        Ok(DrivingState {
            scene: self.scene.clone(),
            timestamp_us: sample.timestamp_us,
            ego: EgoSummary {
                speed_mps: features.ego_speed_mps,
                yaw_deg: yaw_rad.to_degrees(),
            },
            features,
            risk_ttc,
            risk_physics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use physics_risk::RiskLevel;
    use scene_features::SpeedSource;

    fn sample(ts: i64, x: f64, objects: &[(&str, f64, f64)]) -> Sample {
        Sample {
            timestamp_us: ts,
            ego_position: Position2D::new(x, 0.0),
            ego_orientation: Quaternion::from_yaw(0.0),
            annotations: objects
                .iter()
                .map(|&(cat, ox, oy)| RawObject::new(cat, Position2D::new(ox, oy)))
                .collect(),
        }
    }

    #[test]
    fn test_first_frame_is_unknown() {
        let engine = RiskEngine::default();
        let mut scene = engine.scene("scene-0001");
        let state = scene.step(&sample(0, 0.0, &[("vehicle.car", 30.0, 0.0)])).unwrap();

        assert_eq!(state.ego.speed_mps, None);
        assert_eq!(state.risk_physics.level, RiskLevel::Unknown);
        assert_eq!(state.risk_ttc.level, RiskLevel::Unknown);
        assert_eq!(state.features.closest_front_object_m, Some(30.0));
    }

    #[test]
    fn test_fold_produces_physics_risk() {
        let engine = RiskEngine::default();
        // Ego at 20 m/s towards a stationary car
        let samples = vec![
            sample(0, 0.0, &[("vehicle.car", 50.0, 0.0)]),
            sample(500_000, 10.0, &[("vehicle.car", 50.0, 0.0)]),
        ];
        let report = engine.process_scene("scene-0002", &samples);

        assert_eq!(report.states.len(), 2);
        assert!(report.skipped.is_empty());

        let state = &report.states[1];
        assert!((state.ego.speed_mps.unwrap() - 20.0).abs() < 1e-9);
        assert!((state.features.closest_front_object_m.unwrap() - 40.0).abs() < 1e-9);
        assert_eq!(state.risk_physics.level, RiskLevel::High);
        assert!((state.risk_physics.required_deceleration_mps2.unwrap() - 7.14).abs() < 0.01);

        // Closing at 20 m/s from 40 m
        assert!((state.features.min_ttc_s.unwrap() - 2.0).abs() < 1e-9);
        assert_eq!(state.risk_ttc.level, RiskLevel::Medium);
    }

    #[test]
    fn test_invalid_orientation_skips_only_that_frame() {
        let engine = RiskEngine::default();
        let mut bad = sample(500_000, 5.0, &[("vehicle.car", 60.0, 0.0)]);
        bad.ego_orientation = Quaternion::new(0.0, 0.0, 0.0, 0.0);

        let samples = vec![
            sample(0, 0.0, &[("vehicle.car", 60.0, 0.0)]),
            bad,
            sample(1_000_000, 10.0, &[("vehicle.car", 60.0, 0.0)]),
        ];
        let report = engine.process_scene("scene-0003", &samples);

        assert_eq!(report.states.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].timestamp_us, 500_000);

        // Speed of the third frame uses the skipped frame's position
        let last = &report.states[1];
        assert_eq!(last.features.speed_source, SpeedSource::Measured);
        assert!((last.ego.speed_mps.unwrap() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_timestamp_degrades_to_unknown() {
        let engine = RiskEngine::default();
        let samples = vec![
            sample(1_000, 0.0, &[("vehicle.car", 20.0, 0.0)]),
            sample(1_000, 1.0, &[("vehicle.car", 20.0, 0.0)]),
        ];
        let report = engine.process_scene("scene-0004", &samples);

        assert_eq!(report.states.len(), 2);
        let state = &report.states[1];
        assert_eq!(
            state.features.speed_source,
            SpeedSource::NonIncreasingTimestamp
        );
        assert_eq!(state.risk_physics.level, RiskLevel::Unknown);
    }

    #[test]
    fn test_state_risk_view() {
        let engine = RiskEngine::default();
        let samples = vec![
            sample(0, 0.0, &[("vehicle.car", 50.0, 0.0)]),
            sample(500_000, 10.0, &[("vehicle.car", 50.0, 0.0)]),
        ];
        let report = engine.process_scene("scene-0005", &samples);
        let risk = report.states[1].state_risk();

        assert_eq!(risk.risk_level_physics, RiskLevel::High);
        assert_eq!(risk.risk_level_ttc, RiskLevel::Medium);
        assert_eq!(risk.closest_front_object_m, Some(40.0));
    }

    #[test]
    fn test_scenes_in_parallel() {
        let engine = RiskEngine::default();
        let scene_a = vec![
            sample(0, 0.0, &[("vehicle.car", 50.0, 0.0)]),
            sample(500_000, 10.0, &[("vehicle.car", 50.0, 0.0)]),
        ];
        let scene_b = vec![
            sample(0, 0.0, &[("human.pedestrian.adult", 50.0, 0.0)]),
            sample(500_000, 1.0, &[("human.pedestrian.adult", 50.0, 0.0)]),
        ];

        let (a, b) = std::thread::scope(|s| {
            let a = s.spawn(|| engine.process_scene("a", &scene_a));
            let b = s.spawn(|| engine.process_scene("b", &scene_b));
            (a.join().unwrap(), b.join().unwrap())
        });

        assert_eq!(a.states[1].risk_physics.level, RiskLevel::High);
        assert_eq!(b.states[1].risk_physics.level, RiskLevel::Low);
    }

    #[test]
    fn test_engine_rejects_invalid_settings() {
        let mut settings = EngineSettings::default();
        settings.physics.min_distance_m = 0.0;
        assert!(matches!(
            RiskEngine::new(&settings),
            Err(PipelineError::RiskConfig(_))
        ));
    }
}
