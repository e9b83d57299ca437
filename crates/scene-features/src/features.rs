//! Frame Feature Assembly

use crate::category::{CategoryMap, ObjectCategory};
use crate::config::FeatureConfig;
use crate::ego::{EgoState, RawObject};
use geometry::{bearing, distance};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// How the frame's ego speed was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedSource {
    /// Derived from the previous frame's pose
    Measured,
    /// First frame of a scene
    NoPreviousFrame,
    /// Timestamp did not advance since the previous frame
    NonIncreasingTimestamp,
}

/// One object as seen from the current ego pose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectObservation {
    pub category: ObjectCategory,
    /// Planar distance from ego (meters)
    pub distance_m: f64,
    /// Signed angle from ego heading, counter-clockwise positive (degrees)
    pub bearing_deg: f64,
    /// Inside the front cone
    pub in_front: bool,
    /// Rate of change of distance; negative when closing (m/s)
    pub relative_speed_mps: Option<f64>,
    /// Time to collision, only for closing in-front objects (s)
    pub ttc_s: Option<f64>,
}

/// Kinematic features for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameFeatures {
    pub ego_speed_mps: Option<f64>,
    pub speed_source: SpeedSource,
    /// Nearest objects, ascending by distance, capped for display
    pub objects: Vec<ObjectObservation>,
    /// Number of objects within range before the display cap
    pub considered_objects: usize,
    /// Closest in-front object over all considered objects (meters)
    pub closest_front_object_m: Option<f64>,
    /// Smallest TTC over all considered objects (s)
    pub min_ttc_s: Option<f64>,
    /// Relative speeds treat objects as stationary in the world frame
    /// between the two ego observations; only ego motion is captured.
    pub assumes_stationary_objects: bool,
}

/// Computes [`FrameFeatures`] from consecutive ego states
#[derive(Debug, Clone, Default)]
pub struct FrameFeatureExtractor {
    config: FeatureConfig,
    categories: CategoryMap,
}

impl FrameFeatureExtractor {
    pub fn new(config: FeatureConfig, categories: CategoryMap) -> Self {
        Self { config, categories }
    }

    pub fn config(&self) -> &FeatureConfig {
        &self.config
    }

    /// Extract features for `curr`, using `prev` for ego speed and closing rates
    pub fn extract(
        &self,
        prev: Option<&EgoState>,
        curr: &EgoState,
        objects: &[RawObject],
    ) -> FrameFeatures {
        let (dt_s, speed_source) = match prev {
            None => (None, SpeedSource::NoPreviousFrame),
            Some(prev) => {
                // Widened so extreme timestamps cannot overflow
                let elapsed_us = i128::from(curr.timestamp_us) - i128::from(prev.timestamp_us);
                let dt_s = elapsed_us as f64 / 1_000_000.0;
                if dt_s > 0.0 {
                    (Some(dt_s), SpeedSource::Measured)
                } else {
                    warn!(
                        "Non-increasing timestamp: prev={} curr={}; ego speed unknown",
                        prev.timestamp_us, curr.timestamp_us
                    );
                    (None, SpeedSource::NonIncreasingTimestamp)
                }
            }
        };

        // Only set together with dt_s, so both are Some or both None
        let motion = prev.zip(dt_s);

        let ego_speed_mps =
            motion.map(|(prev, dt)| distance(curr.position, prev.position) / dt);

        let mut observations = Vec::with_capacity(objects.len());
        for object in objects {
            let d = distance(curr.position, object.position);
            // Negated so NaN distances are dropped too
            if !(d <= self.config.max_distance_m) {
                continue;
            }

            let bearing_deg = bearing(curr.position, curr.yaw_rad, object.position);
            let in_front = bearing_deg.abs() <= self.config.front_cone_half_angle_deg;

            // Object assumed stationary: same world position seen from both poses
            let relative_speed_mps = motion.map(|(prev, dt)| {
                let prev_d = distance(prev.position, object.position);
                (d - prev_d) / dt
            });

            let ttc_s = match relative_speed_mps {
                Some(rel) if in_front && rel < -self.config.closing_speed_threshold_mps => {
                    Some(d / -rel)
                }
                _ => None,
            };

            observations.push(ObjectObservation {
                category: self.categories.classify(&object.category),
                distance_m: d,
                bearing_deg,
                in_front,
                relative_speed_mps,
                ttc_s,
            });
        }

        let closest_front_object_m = observations
            .iter()
            .filter(|o| o.in_front)
            .map(|o| o.distance_m)
            .min_by(f64::total_cmp);

        let min_ttc_s = observations.iter().filter_map(|o| o.ttc_s).min_by(f64::total_cmp);

        let considered_objects = observations.len();
        observations.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));
        observations.truncate(self.config.max_reported_objects);

        debug!(
            "Frame {}: {} objects in range, closest front {:?}, speed {:?}",
            curr.timestamp_us, considered_objects, closest_front_object_m, ego_speed_mps
        );

        FrameFeatures {
            ego_speed_mps,
            speed_source,
            objects: observations,
            considered_objects,
            closest_front_object_m,
            min_ttc_s,
            assumes_stationary_objects: true,
        }
    }
}
