//! Groundedness Verification
//!
//! Audits that evidence claimed by an external reasoner numerically
//! matches the authoritative state it was given.

mod checker;
mod issue;

pub use checker::{check, check_with_tolerance, GroundednessReport, DEFAULT_TOLERANCE};
pub use issue::GroundednessIssue;
