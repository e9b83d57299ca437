//! Guardrail decision table

use crate::action::Action;
use physics_risk::RiskLevel;
use serde::{Deserialize, Serialize};
use tracing::debug;

const REASON_INVALID_ACTION: &str = "invalid proposed_action";
const REASON_HIGH_RISK: &str = "physics risk is high; braking required";
const REASON_MEDIUM_RISK: &str = "physics risk is medium; cannot keep speed";
const REASON_NO_GAP_CHECK: &str = "lane change disabled (no gap checking)";
const REASON_REASONER_FAILURE: &str = "reasoner failure; fallback slow_down";
const REASON_NO_RULE: &str = "no guardrail rule matched";

/// Outcome of a matched rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Keep the proposed action
    Allow,
    /// Replace the proposed action
    Override {
        action: Action,
        reason: &'static str,
    },
}

/// One row of the decision table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub levels: &'static [RiskLevel],
    pub proposed: &'static [Action],
    pub verdict: Verdict,
}

impl Rule {
    fn matches(&self, level: RiskLevel, proposed: Action) -> bool {
        self.levels.contains(&level) && self.proposed.contains(&proposed)
    }
}

/// Ordered rule table; the first matching row wins.
pub const DECISION_TABLE: &[Rule] = &[
    Rule {
        levels: &[RiskLevel::High],
        proposed: &[
            Action::SlowDown,
            Action::Keep,
            Action::LaneChangeLeft,
            Action::LaneChangeRight,
        ],
        verdict: Verdict::Override {
            action: Action::Brake,
            reason: REASON_HIGH_RISK,
        },
    },
    Rule {
        levels: &[RiskLevel::High],
        proposed: &[Action::Brake],
        verdict: Verdict::Allow,
    },
    Rule {
        levels: &[RiskLevel::Medium],
        proposed: &[Action::Keep, Action::LaneChangeLeft, Action::LaneChangeRight],
        verdict: Verdict::Override {
            action: Action::SlowDown,
            reason: REASON_MEDIUM_RISK,
        },
    },
    Rule {
        levels: &[RiskLevel::Medium],
        proposed: &[Action::Brake, Action::SlowDown],
        verdict: Verdict::Allow,
    },
    Rule {
        levels: &[RiskLevel::Unknown],
        proposed: &[Action::LaneChangeLeft, Action::LaneChangeRight],
        verdict: Verdict::Override {
            action: Action::SlowDown,
            reason: REASON_NO_GAP_CHECK,
        },
    },
    Rule {
        levels: &[RiskLevel::Low],
        proposed: &[Action::LaneChangeLeft, Action::LaneChangeRight],
        verdict: Verdict::Override {
            action: Action::Keep,
            reason: REASON_NO_GAP_CHECK,
        },
    },
    Rule {
        levels: &[RiskLevel::Low, RiskLevel::Unknown],
        proposed: &[Action::Brake, Action::SlowDown, Action::Keep],
        verdict: Verdict::Allow,
    },
];

/// Safety-constrained action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardrailDecision {
    pub final_action: Action,
    pub override_applied: bool,
    /// Empty iff no override was applied
    pub override_reason: String,
}

impl GuardrailDecision {
    fn allow(action: Action) -> Self {
        Self {
            final_action: action,
            override_applied: false,
            override_reason: String::new(),
        }
    }

    fn override_with(action: Action, reason: &str) -> Self {
        Self {
            final_action: action,
            override_applied: true,
            override_reason: reason.to_string(),
        }
    }
}

/// Apply the guardrail to a raw proposed action string.
///
/// Anything outside the [`Action`] set becomes `slow_down` with an override,
/// regardless of risk level.
pub fn decide(level: RiskLevel, proposed: &str) -> GuardrailDecision {
    match proposed.parse::<Action>() {
        Ok(action) => decide_action(level, action),
        Err(err) => {
            debug!("Guardrail: {}", err);
            GuardrailDecision::override_with(Action::SlowDown, REASON_INVALID_ACTION)
        }
    }
}

/// Apply the guardrail to an already-validated action
pub fn decide_action(level: RiskLevel, proposed: Action) -> GuardrailDecision {
    let verdict = DECISION_TABLE
        .iter()
        .find(|rule| rule.matches(level, proposed))
        .map(|rule| rule.verdict)
        .unwrap_or(Verdict::Override {
            action: Action::SlowDown,
            reason: REASON_NO_RULE,
        });

    let decision = match verdict {
        Verdict::Allow => GuardrailDecision::allow(proposed),
        Verdict::Override { action, reason } => GuardrailDecision::override_with(action, reason),
    };

    debug!(
        "Guardrail: level={} proposed={} -> {} (override={})",
        level, proposed, decision.final_action, decision.override_applied
    );
    decision
}

/// Decision used when the reasoner produced no usable proposal
pub fn fallback_on_reasoner_failure() -> GuardrailDecision {
    GuardrailDecision::override_with(Action::SlowDown, REASON_REASONER_FAILURE)
}
