//! Groundedness Issue Types

use serde_json::Value;
use thiserror::Error;

/// A claimed evidence value that disagrees with the state
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GroundednessIssue {
    /// Numbers differ by more than the tolerance
    #[error("evidence numeric mismatch for {key}: claimed={claimed} vs state={state}")]
    NumericMismatch {
        key: String,
        claimed: f64,
        state: f64,
    },

    /// Non-numeric values differ, or only one side is null
    #[error("evidence mismatch for {key}: claimed={claimed} vs state={state}")]
    Mismatch {
        key: String,
        claimed: Value,
        state: Value,
    },
}

impl GroundednessIssue {
    /// Evidence key the issue refers to
    pub fn key(&self) -> &str {
        match self {
            GroundednessIssue::NumericMismatch { key, .. } => key,
            GroundednessIssue::Mismatch { key, .. } => key,
        }
    }
}
