//! Pipeline Error Types

use thiserror::Error;

/// Pipeline error types
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Geometry error: {0}")]
    Geometry(#[from] geometry::GeometryError),

    #[error("Invalid feature configuration: {0}")]
    FeatureConfig(#[from] scene_features::FeatureError),

    #[error("Invalid risk configuration: {0}")]
    RiskConfig(#[from] physics_risk::ConfigError),

    #[error("Settings loading failed: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Logging initialization failed: {0}")]
    Logging(String),
}
