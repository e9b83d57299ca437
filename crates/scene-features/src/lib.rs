//! Frame Feature Extraction
//!
//! Turns consecutive ego poses and the current object annotations into
//! per-frame kinematic features: ego speed, per-object distance, bearing,
//! closing speed and time-to-collision, plus the closest in-front object.

mod category;
mod config;
mod ego;
mod error;
mod features;

pub use category::{CategoryMap, CategoryRule, ObjectCategory};
pub use config::FeatureConfig;
pub use ego::{EgoState, RawObject};
pub use error::FeatureError;
pub use features::{FrameFeatureExtractor, FrameFeatures, ObjectObservation, SpeedSource};
