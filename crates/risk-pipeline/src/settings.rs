//! Engine settings

use crate::error::PipelineError;
use config::{Config, Environment, File, FileFormat};
use physics_risk::{PhysicsRiskConfig, TtcRiskConfig};
use scene_features::{CategoryMap, FeatureConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Environment variable prefix, e.g. `RISK_ENGINE__PHYSICS__REACTION_TIME_S`
pub const ENV_PREFIX: &str = "RISK_ENGINE";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Maximum level: trace, debug, info, warn, error
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// All tunables of the risk engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub features: FeatureConfig,
    pub categories: CategoryMap,
    pub physics: PhysicsRiskConfig,
    pub ttc: TtcRiskConfig,
    pub logging: LoggingSettings,
}

impl EngineSettings {
    /// Load defaults, then an optional TOML file, then `RISK_ENGINE__*`
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, PipelineError> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);
        if let Some(path) = path {
            info!("Loading engine settings from {}", path.display());
            builder = builder.add_source(File::from(path));
        }

        let settings: Self = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Defaults overridden by an inline TOML document
    pub fn from_toml_str(toml: &str) -> Result<Self, PipelineError> {
        let settings: Self = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Check every component configuration
    pub fn validate(&self) -> Result<(), PipelineError> {
        self.features.validate()?;
        self.physics.validate()?;
        self.ttc.validate()?;
        Ok(())
    }
}
