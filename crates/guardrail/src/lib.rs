//! Guardrail Decision Engine
//!
//! Constrains an untrusted proposed action using the physics risk level.
//! The safety behavior lives in a single ordered table, [`DECISION_TABLE`],
//! evaluated top to bottom after the invalid-action check.

mod action;
mod rules;

pub use action::{Action, InvalidAction};
pub use rules::{
    decide, decide_action, fallback_on_reasoner_failure, GuardrailDecision, Rule, Verdict,
    DECISION_TABLE,
};
