//! Real-time fatigue classification from response-time and error-rate
//! trends plus the learner's 1-10 self-report. Stateless; recomputed on
//! every check.

use serde::{Deserialize, Serialize};

use crate::config::FatigueThresholds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FatigueTier {
    Low,
    Moderate,
    High,
    Severe,
}

impl FatigueTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Severe => "severe",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendedAction {
    Continue,
    Microbreak,
    Break,
    Stop,
}

impl RecommendedAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Continue => "continue",
            Self::Microbreak => "microbreak",
            Self::Break => "break",
            Self::Stop => "stop",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FatigueAssessment {
    /// Additive 0-10 score.
    pub score: u32,
    pub tier: FatigueTier,
    pub recommended_action: RecommendedAction,
    /// 0-1, grows with available history.
    pub confidence: f64,
}

/// Linear trend over the trailing window: (last - first) / window length.
fn window_trend(history: &[f64], window: usize) -> f64 {
    let tail = if history.len() > window {
        &history[history.len() - window..]
    } else {
        history
    };
    match (tail.first(), tail.last()) {
        (Some(first), Some(last)) if tail.len() > 1 => (last - first) / tail.len() as f64,
        _ => 0.0,
    }
}

/// Points for one monotone threshold ladder; the highest matching threshold
/// wins, categories never accumulate across their own rungs.
fn ladder_points(value: f64, thresholds: &[f64]) -> u32 {
    thresholds.iter().filter(|t| value > **t).count() as u32
}

/// Classify current fatigue.
///
/// Fewer than `min_samples` response-time samples forces the low-confidence
/// continue default regardless of trends or self-report.
pub fn classify_fatigue(
    thresholds: &FatigueThresholds,
    response_times: &[f64],
    error_rates: &[f64],
    self_reported: f64,
) -> FatigueAssessment {
    let confidence = (response_times.len() as f64 / 10.0).min(1.0);

    if response_times.len() < thresholds.min_samples {
        return FatigueAssessment {
            score: 0,
            tier: FatigueTier::Low,
            recommended_action: RecommendedAction::Continue,
            confidence,
        };
    }

    let rt_trend = window_trend(response_times, thresholds.window);
    let error_trend = window_trend(error_rates, thresholds.window);

    let score = ladder_points(rt_trend, &thresholds.rt_trend)
        + ladder_points(error_trend, &thresholds.error_trend)
        + ladder_points(self_reported, &thresholds.self_report);

    let [low, moderate, high] = thresholds.tier_bounds;
    let (tier, recommended_action) = if score <= low {
        (FatigueTier::Low, RecommendedAction::Continue)
    } else if score <= moderate {
        (FatigueTier::Moderate, RecommendedAction::Microbreak)
    } else if score <= high {
        (FatigueTier::High, RecommendedAction::Break)
    } else {
        (FatigueTier::Severe, RecommendedAction::Stop)
    };

    FatigueAssessment {
        score,
        tier,
        recommended_action,
        confidence,
    }
}
