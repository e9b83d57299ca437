//! Logging initialization

use crate::error::PipelineError;
use crate::settings::LoggingSettings;
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install the global tracing subscriber.
///
/// Fails if the level is unknown or a subscriber is already installed.
pub fn init_logging(settings: &LoggingSettings) -> Result<(), PipelineError> {
    let level = Level::from_str(&settings.level)
        .map_err(|e| PipelineError::Logging(format!("{}: {:?}", e, settings.level)))?;

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true);

    let result = if settings.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| PipelineError::Logging(e.to_string()))
}
