//! Driving Risk Pipeline
//!
//! Folds a scene's samples in temporal order into driving states:
//! - Frame features (ego speed, object bearings, closing speeds, TTC)
//! - Physics stopping-distance risk and TTC risk
//! - Guardrail application over externally proposed actions
//! - Groundedness audit of claimed evidence
//!
//! Scenes are independent; a [`RiskEngine`] can be shared across threads.

mod audit;
mod error;
mod logging;
mod policy;
mod scene;
mod settings;
mod state;

pub use audit::{audit_prediction, AuditReport};
pub use error::PipelineError;
pub use logging::init_logging;
pub use policy::{apply_policy, PolicyOutcome, ProposedPolicy};
pub use scene::{RiskEngine, Sample, SceneProcessor, SceneReport, SkippedFrame};
pub use settings::{EngineSettings, LoggingSettings, ENV_PREFIX};
pub use state::{DrivingState, EgoSummary, StateRisk};
