//! Aggregates raw per-session performance into the mastery and
//! personal-consistency factors the LECTOR interval model consumes.
//! Empty input degrades to neutral defaults rather than failing.

use serde::{Deserialize, Serialize};

/// One session's worth of measured performance for a subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRecord {
    /// 0-100.
    pub accuracy: f64,
    /// 0-100.
    pub completion_rate: f64,
    /// Mean response time for the session, ms.
    pub avg_response_time: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceFactors {
    /// Clamped to [0.5, 2.0].
    pub mastery: f64,
    /// Clamped to [0.7, 1.5]; lower timing variance scores higher, since
    /// consistent speed signals stable mastery.
    pub personal: f64,
    /// 0-1 response-time consistency (1 - coefficient of variation, floored).
    pub consistency: f64,
}

impl Default for PerformanceFactors {
    fn default() -> Self {
        Self {
            mastery: 1.0,
            personal: 1.0,
            consistency: 0.5,
        }
    }
}

/// Fold a performance history into LECTOR factors.
pub fn aggregate(history: &[PerformanceRecord]) -> PerformanceFactors {
    if history.is_empty() {
        return PerformanceFactors::default();
    }

    let n = history.len() as f64;
    let avg_accuracy = history.iter().map(|r| r.accuracy).sum::<f64>() / n;
    let avg_completion = history.iter().map(|r| r.completion_rate).sum::<f64>() / n;
    let mastery = ((avg_accuracy + avg_completion) / 100.0).clamp(0.5, 2.0);

    let cv = response_time_cv(history);
    let personal = (1.5 - cv).clamp(0.7, 1.5);
    let consistency = (1.0 - cv).max(0.0);

    PerformanceFactors {
        mastery,
        personal,
        consistency,
    }
}

/// Coefficient of variation of the recorded mean response times.
fn response_time_cv(history: &[PerformanceRecord]) -> f64 {
    let n = history.len() as f64;
    let mean = history.iter().map(|r| r.avg_response_time).sum::<f64>() / n;
    if mean <= 0.0 {
        return 0.0;
    }
    let variance = history
        .iter()
        .map(|r| (r.avg_response_time - mean).powi(2))
        .sum::<f64>()
        / n;
    variance.sqrt() / mean
}
