//! Risk scoring: weighted feature heuristic and the three-way decision.

use crate::capture::types::InputEvent;
use crate::scoring::features::{extract_features, FeatureVector};
use serde::{Deserialize, Serialize};

/// Scores below this are allowed outright.
pub const ALLOW_BELOW_PCT: f64 = 35.0;
/// Scores below this (and above the allow line) require step-up auth.
pub const STEP_UP_BELOW_PCT: f64 = 70.0;

/// Outcome of scoring one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    #[serde(rename = "ALLOW")]
    Allow,
    #[serde(rename = "STEP_UP")]
    StepUp,
    #[serde(rename = "BLOCK")]
    Block,
}

impl Decision {
    pub fn from_risk_pct(pct: f64) -> Self {
        if pct < ALLOW_BELOW_PCT {
            Decision::Allow
        } else if pct < STEP_UP_BELOW_PCT {
            Decision::StepUp
        } else {
            Decision::Block
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Allow => write!(f, "ALLOW"),
            Decision::StepUp => write!(f, "STEP_UP"),
            Decision::Block => write!(f, "BLOCK"),
        }
    }
}

/// Weighted-sum risk heuristic, in percent.
///
/// Each feature is normalized against a rough upper bound, then combined
/// with fixed weights and clamped. Not a trained model; a baseline.
pub fn compute_risk(features: &FeatureVector) -> f64 {
    let dwell = features.dwell_mean / 300.0;
    let flight = features.flight_mean / 300.0;
    let errors = features.error_rate * 5.0;
    let speed = features.mouse_speed_p95 / 800.0;
    let entropy = features.gesture_entropy / 5.0;

    let score = 0.35 * dwell + 0.25 * flight + 0.15 * errors + 0.15 * speed + 0.10 * entropy;
    score.clamp(0.0, 1.0) * 100.0
}

/// The scorer's wire response: risk percent, decision, and the features
/// the score was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub risk_pct: f64,
    pub decision: Decision,
    pub features: FeatureVector,
}

impl RiskReport {
    /// Score one event sequence end to end.
    ///
    /// The decision is taken on the unrounded percent; `risk_pct` is rounded
    /// to two decimals for the wire.
    pub fn from_events(events: &[InputEvent]) -> Self {
        let features = extract_features(events);
        let raw_pct = compute_risk(&features);
        Self {
            risk_pct: (raw_pct * 100.0).round() / 100.0,
            decision: Decision::from_risk_pct(raw_pct),
            features,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(
        dwell_mean: f64,
        flight_mean: f64,
        error_rate: f64,
        mouse_speed_p95: f64,
        gesture_entropy: f64,
    ) -> FeatureVector {
        FeatureVector {
            dwell_mean,
            flight_mean,
            error_rate,
            mouse_speed_p95,
            gesture_entropy,
        }
    }

    #[test]
    fn test_zero_features_score_zero() {
        let score = compute_risk(&features(0.0, 0.0, 0.0, 0.0, 0.0));
        assert_eq!(score, 0.0);
        assert_eq!(Decision::from_risk_pct(score), Decision::Allow);
    }

    #[test]
    fn test_saturated_features_score_hundred() {
        // Every term at its normalization bound: 0.35+0.25+0.15+0.15+0.10 = 1.
        let score = compute_risk(&features(300.0, 300.0, 0.2, 800.0, 5.0));
        assert_eq!(score, 100.0);
        assert_eq!(Decision::from_risk_pct(score), Decision::Block);
    }

    #[test]
    fn test_score_is_clamped() {
        let score = compute_risk(&features(3000.0, 3000.0, 1.0, 8000.0, 50.0));
        assert_eq!(score, 100.0);
    }

    #[test]
    fn test_decision_boundaries() {
        assert_eq!(Decision::from_risk_pct(34.99), Decision::Allow);
        assert_eq!(Decision::from_risk_pct(35.0), Decision::StepUp);
        assert_eq!(Decision::from_risk_pct(69.99), Decision::StepUp);
        assert_eq!(Decision::from_risk_pct(70.0), Decision::Block);
    }

    #[test]
    fn test_decision_wire_names() {
        assert_eq!(serde_json::to_value(Decision::Allow).unwrap(), "ALLOW");
        assert_eq!(serde_json::to_value(Decision::StepUp).unwrap(), "STEP_UP");
        assert_eq!(serde_json::to_value(Decision::Block).unwrap(), "BLOCK");
        assert_eq!(Decision::StepUp.to_string(), "STEP_UP");
    }

    #[test]
    fn test_report_from_empty_events() {
        let report = RiskReport::from_events(&[]);
        assert_eq!(report.risk_pct, 0.0);
        assert_eq!(report.decision, Decision::Allow);
    }

    #[test]
    fn test_report_rounds_to_two_decimals() {
        // One key held 100ms: 0.35 * 100/300 = 0.116666... -> 11.67%.
        let events = vec![
            InputEvent::Down {
                t: 0.0,
                k: "a".to_string(),
            },
            InputEvent::Up {
                t: 100.0,
                k: "a".to_string(),
            },
        ];
        let report = RiskReport::from_events(&events);
        assert_eq!(report.risk_pct, 11.67);
        assert_eq!(report.decision, Decision::Allow);
    }
}
