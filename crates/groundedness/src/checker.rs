//! Evidence checker

use crate::issue::GroundednessIssue;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

/// Maximum absolute difference for numeric evidence to count as a match
pub const DEFAULT_TOLERANCE: f64 = 0.2;

/// Result of a groundedness check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroundednessReport {
    /// No issues were found
    pub passed: bool,
    /// Issues in the iteration order of the claimed evidence
    #[serde(serialize_with = "serialize_issues")]
    pub issues: Vec<GroundednessIssue>,
    /// Number of evidence keys compared against the state
    pub keys_checked: usize,
}

impl GroundednessReport {
    /// Issue descriptions as plain strings
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }
}

fn serialize_issues<S>(issues: &[GroundednessIssue], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(issues.iter().map(ToString::to_string))
}

/// Check claimed evidence against state with [`DEFAULT_TOLERANCE`]
pub fn check(claimed: &Map<String, Value>, state: &Map<String, Value>) -> GroundednessReport {
    check_with_tolerance(claimed, state, DEFAULT_TOLERANCE)
}

/// Check claimed evidence against state.
///
/// Keys absent from `state` are skipped. Two nulls match; a single null is a
/// mismatch. Two numbers match within `tolerance`; any other pair must be
/// exactly equal.
pub fn check_with_tolerance(
    claimed: &Map<String, Value>,
    state: &Map<String, Value>,
    tolerance: f64,
) -> GroundednessReport {
    let mut issues = Vec::new();
    let mut keys_checked = 0;

    for (key, claimed_value) in claimed {
        let Some(state_value) = state.get(key) else {
            continue;
        };
        keys_checked += 1;

        if let Some(issue) = compare(key, claimed_value, state_value, tolerance) {
            debug!("Groundedness: {}", issue);
            issues.push(issue);
        }
    }

    GroundednessReport {
        passed: issues.is_empty(),
        issues,
        keys_checked,
    }
}

fn compare(key: &str, claimed: &Value, state: &Value, tolerance: f64) -> Option<GroundednessIssue> {
    match (claimed, state) {
        (Value::Null, Value::Null) => None,
        (Value::Number(c), Value::Number(s)) => {
            let (c, s) = (c.as_f64()?, s.as_f64()?);
            ((c - s).abs() > tolerance).then(|| GroundednessIssue::NumericMismatch {
                key: key.to_string(),
                claimed: c,
                state: s,
            })
        }
        (c, s) if c == s => None,
        (c, s) => Some(GroundednessIssue::Mismatch {
            key: key.to_string(),
            claimed: c.clone(),
            state: s.clone(),
        }),
    }
}
