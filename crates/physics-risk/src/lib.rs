//! Physics Risk Model
//!
//! Classifies forward collision risk from ego speed and the closest
//! in-front object using stopping-distance kinematics. No learned
//! component is involved; the result is fully determined by the two
//! inputs and a [`PhysicsRiskConfig`].
//!
//! Also provides the TTC-based banding used as a secondary, informational
//! risk signal.

mod config;
mod error;
mod level;
mod risk;
mod ttc;

pub use config::{PhysicsRiskConfig, TtcRiskConfig};
pub use error::ConfigError;
pub use level::RiskLevel;
pub use risk::{braking_distance, compute_physics_risk, PhysicsRiskAssessment};
pub use ttc::{assess_ttc_risk, TtcRiskAssessment};
