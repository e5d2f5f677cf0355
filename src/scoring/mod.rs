//! Risk scoring pipeline: feature extraction, the weighted heuristic, and
//! the score log.

pub mod features;
pub mod risk;
pub mod scorelog;

pub use features::{extract_features, FeatureVector};
pub use risk::{compute_risk, Decision, RiskReport};
pub use scorelog::ScoreLog;
