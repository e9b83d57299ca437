//! Guardrail application over reasoner output

use crate::state::StateRisk;
use guardrail::{decide, fallback_on_reasoner_failure, GuardrailDecision};
use metrics::counter;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

/// Structured output of the external reasoner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProposedPolicy {
    /// Untrusted action name, validated by the guardrail
    pub proposed_action: String,
    #[serde(default)]
    pub rationale: Vec<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    /// Claimed values the rationale relies on
    #[serde(default)]
    pub evidence: Map<String, Value>,
}

impl ProposedPolicy {
    pub fn new(proposed_action: impl Into<String>) -> Self {
        Self {
            proposed_action: proposed_action.into(),
            ..Default::default()
        }
    }
}

/// Guardrail result for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyOutcome {
    /// Echo of the proposal; `None` if the reasoner failed
    pub proposed_action: Option<String>,
    pub confidence: Option<f64>,
    pub decision: GuardrailDecision,
}

/// Constrain the reasoner's proposal by the state's physics risk level.
///
/// `None` means the reasoner produced nothing usable.
pub fn apply_policy(state: &StateRisk, policy: Option<&ProposedPolicy>) -> PolicyOutcome {
    let Some(policy) = policy else {
        warn!("No usable reasoner output; falling back to slow_down");
        counter!("risk_pipeline_reasoner_failures_total").increment(1);
        return PolicyOutcome {
            proposed_action: None,
            confidence: None,
            decision: fallback_on_reasoner_failure(),
        };
    };

    let decision = decide(state.risk_level_physics, &policy.proposed_action);
    if decision.override_applied {
        info!(
            "Guardrail override: {:?} -> {} ({})",
            policy.proposed_action, decision.final_action, decision.override_reason
        );
        counter!("risk_pipeline_guardrail_overrides_total").increment(1);
    }

    PolicyOutcome {
        proposed_action: Some(policy.proposed_action.clone()),
        confidence: policy.confidence,
        decision,
    }
}
