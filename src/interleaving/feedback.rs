//! Offline analysis of past interleaving segments: is the switching
//! actually helping, and which segment length performs best?

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::InterleavingSegment;

/// Minutes per duration bucket.
const BUCKET_MINUTES: f64 = 5.0;
/// A bucket needs this many samples before it can drive the recommendation.
const MIN_BUCKET_SAMPLES: usize = 2;
/// Fallback recommendation when no bucket qualifies.
const DEFAULT_SEGMENT_MINUTES: f64 = 15.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterleavingFeedback {
    /// Mean measured performance across scored segments, 0-1.
    pub average_performance: f64,
    /// Performance delta of switched-into segments over non-switched ones.
    /// Positive means the interleaving itself is paying off.
    pub switching_benefit: f64,
    /// Best-performing 5-minute duration bucket, as a segment length to
    /// prefer going forward.
    pub recommended_segment_length: f64,
    pub message: String,
}

impl Default for InterleavingFeedback {
    fn default() -> Self {
        Self {
            average_performance: 0.0,
            switching_benefit: 0.0,
            recommended_segment_length: DEFAULT_SEGMENT_MINUTES,
            message: "Not enough interleaving history yet; need more data".to_string(),
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Score a segment log. Only segments with measured performance count;
/// fewer than two of them yields the neutral default.
pub fn analyze_feedback(history: &[InterleavingSegment]) -> InterleavingFeedback {
    let scored: Vec<&InterleavingSegment> =
        history.iter().filter(|s| s.performance.is_some()).collect();
    if scored.len() < 2 {
        return InterleavingFeedback::default();
    }

    let performances: Vec<f64> = scored.iter().filter_map(|s| s.performance).collect();
    let average_performance = mean(&performances);

    let switched: Vec<f64> = scored
        .iter()
        .filter(|s| s.switched_from.is_some())
        .filter_map(|s| s.performance)
        .collect();
    let unswitched: Vec<f64> = scored
        .iter()
        .filter(|s| s.switched_from.is_none())
        .filter_map(|s| s.performance)
        .collect();
    let switching_benefit = if switched.is_empty() || unswitched.is_empty() {
        0.0
    } else {
        mean(&switched) - mean(&unswitched)
    };

    // 5-minute duration buckets; the best-performing bucket with enough
    // samples becomes the recommended segment length.
    let mut buckets: HashMap<i64, Vec<f64>> = HashMap::new();
    for segment in &scored {
        let bucket = (segment.duration / BUCKET_MINUTES).floor() as i64;
        if let Some(performance) = segment.performance {
            buckets.entry(bucket).or_default().push(performance);
        }
    }
    let recommended_segment_length = buckets
        .iter()
        .filter(|(_, samples)| samples.len() >= MIN_BUCKET_SAMPLES)
        .max_by(|a, b| {
            mean(a.1)
                .partial_cmp(&mean(b.1))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(bucket, _)| *bucket as f64 * BUCKET_MINUTES + BUCKET_MINUTES / 2.0)
        .unwrap_or(DEFAULT_SEGMENT_MINUTES);

    let message = if switching_benefit > 0.05 {
        "Interleaving is helping; keep alternating topics".to_string()
    } else if switching_benefit < -0.05 {
        "Switching costs currently outweigh the benefit; consider longer blocks".to_string()
    } else {
        "Interleaving effect is neutral so far".to_string()
    };

    InterleavingFeedback {
        average_performance,
        switching_benefit,
        recommended_segment_length,
        message,
    }
}
