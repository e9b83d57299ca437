//! Driving actions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Proposed action outside the allowed set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid proposed_action: {0:?}")]
pub struct InvalidAction(pub String);

/// Allowed driving actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Brake,
    SlowDown,
    Keep,
    LaneChangeLeft,
    LaneChangeRight,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Brake,
        Action::SlowDown,
        Action::Keep,
        Action::LaneChangeLeft,
        Action::LaneChangeRight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Brake => "brake",
            Action::SlowDown => "slow_down",
            Action::Keep => "keep",
            Action::LaneChangeLeft => "lane_change_left",
            Action::LaneChangeRight => "lane_change_right",
        }
    }

    pub fn is_lane_change(&self) -> bool {
        matches!(self, Action::LaneChangeLeft | Action::LaneChangeRight)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = InvalidAction;

    /// Exact, case-sensitive match against the wire names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| InvalidAction(s.to_string()))
    }
}
