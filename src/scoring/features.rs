//! Feature extraction over a captured event sequence.
//!
//! Turns the raw key/move stream into the five timing features the risk
//! heuristic consumes. Everything here is a pure function of the event
//! slice; no feature looks at key content beyond matching downs to ups.

use crate::capture::types::InputEvent;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of histogram bins used for gesture entropy.
const ANGLE_BINS: usize = 12;

/// Timing features for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Mean key hold time (down to matching up), milliseconds.
    pub dwell_mean: f64,
    /// Mean time from a key release to the next key press, milliseconds.
    pub flight_mean: f64,
    /// Share of key presses that re-pressed an already-held key.
    pub error_rate: f64,
    /// 95th percentile of pointer speed, pixels per second.
    pub mouse_speed_p95: f64,
    /// Shannon entropy (bits) of the pointer movement direction histogram.
    pub gesture_entropy: f64,
}

/// Extract the feature vector from one event sequence.
pub fn extract_features(events: &[InputEvent]) -> FeatureVector {
    let mut downs: HashMap<&str, f64> = HashMap::new();
    let mut dwell: Vec<f64> = Vec::new();
    let mut flight: Vec<f64> = Vec::new();
    let mut last_up: Option<f64> = None;
    let mut errors = 0usize;
    let mut total_keys = 0usize;

    let mut xs: Vec<f64> = Vec::new();
    let mut ys: Vec<f64> = Vec::new();
    let mut ts: Vec<f64> = Vec::new();

    for event in events {
        match event {
            InputEvent::Down { t, k } => {
                total_keys += 1;
                // A down for a key that is already held counts as an error;
                // the pending timestamp is overwritten either way.
                if downs.insert(k.as_str(), *t).is_some() {
                    errors += 1;
                }
                if let Some(up) = last_up.take() {
                    flight.push((t - up).max(0.0));
                }
            }
            InputEvent::Up { t, k } => {
                // An up with no pending down is ignored.
                if let Some(down) = downs.remove(k.as_str()) {
                    dwell.push((t - down).max(0.0));
                    last_up = Some(*t);
                }
            }
            InputEvent::Move { t, x, y } => {
                xs.push(*x);
                ys.push(*y);
                ts.push(*t);
            }
        }
    }

    let mut speeds: Vec<f64> = Vec::new();
    let mut angles: Vec<f64> = Vec::new();
    for i in 1..ts.len() {
        let mut dt = (ts[i] - ts[i - 1]) / 1000.0;
        if dt == 0.0 {
            dt = 1e-6;
        }
        let dx = xs[i] - xs[i - 1];
        let dy = ys[i] - ys[i - 1];
        speeds.push((dx * dx + dy * dy).sqrt() / dt);
        angles.push(dy.atan2(dx));
    }

    FeatureVector {
        dwell_mean: mean(&dwell),
        flight_mean: mean(&flight),
        error_rate: errors as f64 / total_keys.max(1) as f64,
        mouse_speed_p95: percentile_95(&speeds),
        gesture_entropy: histogram_entropy(&angles, ANGLE_BINS),
    }
}

fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// 95th percentile with linear interpolation between order statistics.
fn percentile_95(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = 0.95 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
}

/// Shannon entropy (bits) of an equal-width histogram over the sample range.
/// A constant sample set occupies one bin and scores zero.
fn histogram_entropy(samples: &[f64], bins: usize) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let min = samples.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if !(max > min) {
        return 0.0;
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &sample in samples {
        // The range maximum lands in the last bin.
        let idx = (((sample - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let total = samples.len() as f64 + 1e-9;
    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -(p * p.log2())
        })
        .sum()
}
