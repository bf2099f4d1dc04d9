//! Spaced-repetition interval engine: two interchangeable policies (classic
//! SM-2 and the extended LECTOR multiplicative model) folded over a
//! `ReviewItem`, plus review-instant placement.

pub mod interference;
pub mod lector;
pub mod metrics;
pub mod sm2;

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::config::OptimizerConfig;
use crate::error::EngineError;
use crate::types::{DifficultyTier, ReviewItem};
use interference::interference_factor;
use lector::LectorFactors;
use metrics::PerformanceRecord;

/// Reviews always land at 10:00 local on the target date, aligning with
/// circadian peak-recall windows rather than the moment the session ended.
const REVIEW_HOUR: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum SchedulingPolicy {
    /// Classic SM-2; an explicit alternate policy, not a fallback.
    Sm2,
    #[default]
    Lector,
}

/// Per-review inputs the LECTOR policy weighs beyond the quality score.
/// All fields degrade gracefully: empty history and no recent concepts
/// produce neutral factors.
#[derive(Debug, Clone, Default)]
pub struct ReviewContext<'a> {
    /// Keywords describing the reviewed concept, for interference scoring.
    pub concept_keywords: &'a str,
    /// Recently studied concepts as (id, keywords), oldest first.
    pub recent_concepts: &'a [(String, String)],
    /// Precomputed similarity lookup keyed by concept-id pair.
    pub similarity_matrix: Option<&'a HashMap<(String, String), f64>>,
    /// Per-session performance history for the subject.
    pub performance_history: &'a [PerformanceRecord],
}

/// Outcome of folding one review into an item's state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUpdate {
    pub item: ReviewItem,
    pub quality: f64,
    pub prev_interval: f64,
    pub prev_ease_factor: f64,
    /// Advisory only: a higher-engagement weekday to prefer for the reminder
    /// when the computed date lands on a weekend. The review date itself is
    /// never moved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engagement_day_hint: Option<String>,
}

/// Place the next review at 10:00 on the date `interval_days` after `base`.
pub fn review_instant(base: NaiveDateTime, interval_days: f64) -> NaiveDateTime {
    let date = base.date() + Duration::days(interval_days.round() as i64);
    date.and_hms_opt(REVIEW_HOUR, 0, 0).unwrap_or(base)
}

/// Weekday engagement advisory for a computed review instant.
fn engagement_day_hint(next_review: NaiveDateTime) -> Option<String> {
    match next_review.weekday() {
        Weekday::Sat | Weekday::Sun => Some("tuesday".to_string()),
        _ => None,
    }
}

/// Fold one review (a 0-5 quality score) into the item's interval/ease
/// state under the chosen policy.
///
/// Quality outside the 0-5 scale is rejected; everything else degrades to
/// neutral defaults. Updates for one item must be applied in
/// session-completion order -- the transition is a fold over quality scores.
pub fn apply_review(
    config: &OptimizerConfig,
    item: &ReviewItem,
    quality: f64,
    age: u32,
    policy: SchedulingPolicy,
    context: &ReviewContext<'_>,
    now: NaiveDateTime,
) -> Result<ReviewUpdate, EngineError> {
    if !(0.0..=5.0).contains(&quality) {
        return Err(EngineError::QualityOutOfRange(quality));
    }

    let base_interval = sm2::next_interval(&config.sm2, item.interval, item.ease_factor, quality);
    let interval = match policy {
        SchedulingPolicy::Sm2 => base_interval,
        SchedulingPolicy::Lector => {
            let factors = metrics::aggregate(context.performance_history);
            let semantic = interference_factor(
                &item.subject,
                context.concept_keywords,
                context.recent_concepts,
                context.similarity_matrix,
            );
            lector::next_interval(
                &config.lector,
                base_interval,
                &LectorFactors {
                    semantic,
                    mastery: factors.mastery,
                    repetition_count: item.repetition_count,
                    personal: factors.personal,
                    age,
                },
            )
        }
    };

    let ease_factor = sm2::update_ease_factor(&config.sm2, item.ease_factor, quality);
    let next_review = review_instant(now, interval);

    let updated = ReviewItem {
        subject: item.subject.clone(),
        difficulty: DifficultyTier::from_quality(quality),
        interval,
        ease_factor,
        repetition_count: item.repetition_count + 1,
        last_reviewed: Some(now),
        next_review: Some(next_review),
    };

    Ok(ReviewUpdate {
        item: updated,
        quality,
        prev_interval: item.interval,
        prev_ease_factor: item.ease_factor,
        engagement_day_hint: engagement_day_hint(next_review),
    })
}
