//! Prediction audit

use crate::policy::ProposedPolicy;
use crate::state::StateRisk;
use groundedness::{check, GroundednessReport};
use guardrail::{Action, InvalidAction};
use serde::Serialize;

/// Audit of one reasoner prediction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    pub passed: bool,
    /// Set when the proposed action is outside the allowed set
    #[serde(serialize_with = "serialize_invalid")]
    pub invalid_action: Option<InvalidAction>,
    pub groundedness: GroundednessReport,
}

impl AuditReport {
    /// All issues as strings, invalid action first
    pub fn messages(&self) -> Vec<String> {
        let mut messages = Vec::new();
        if let Some(InvalidAction(action)) = &self.invalid_action {
            messages.push(format!("invalid action: {}", action));
        }
        messages.extend(self.groundedness.messages());
        messages
    }
}

fn serialize_invalid<S>(value: &Option<InvalidAction>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match value {
        Some(InvalidAction(action)) => serializer.serialize_some(action),
        None => serializer.serialize_none(),
    }
}

/// Validate the proposed action and check its evidence against the state
pub fn audit_prediction(state: &StateRisk, policy: &ProposedPolicy) -> AuditReport {
    let invalid_action = policy.proposed_action.parse::<Action>().err();
    let groundedness = check(&policy.evidence, &state.to_evidence_map());

    AuditReport {
        passed: invalid_action.is_none() && groundedness.passed,
        invalid_action,
        groundedness,
    }
}
