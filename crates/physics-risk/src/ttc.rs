//! Time-to-collision risk banding

use crate::config::TtcRiskConfig;
use crate::level::RiskLevel;
use serde::{Deserialize, Serialize};

/// TTC-derived risk for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TtcRiskAssessment {
    /// Smallest TTC among closing in-front objects (s)
    pub min_ttc_s: Option<f64>,
    pub level: RiskLevel,
    pub reason: String,
}

/// Band the frame's minimum TTC into a risk level
pub fn assess_ttc_risk(min_ttc_s: Option<f64>, cfg: &TtcRiskConfig) -> TtcRiskAssessment {
    let (level, reason) = match min_ttc_s {
        None => (RiskLevel::Unknown, "no valid ttc computed".to_string()),
        Some(ttc) if ttc < cfg.high_below_s => (
            RiskLevel::High,
            format!("ttc below {}s", cfg.high_below_s),
        ),
        Some(ttc) if ttc < cfg.medium_below_s => (
            RiskLevel::Medium,
            format!("ttc below {}s", cfg.medium_below_s),
        ),
        Some(_) => (
            RiskLevel::Low,
            format!("ttc at or above {}s", cfg.medium_below_s),
        ),
    };

    TtcRiskAssessment {
        min_ttc_s,
        level,
        reason,
    }
}
