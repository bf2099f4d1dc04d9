//! `StudyOptimizer`: the single entry point tying scheduling, spaced
//! repetition, assessment, and interleaving together. Holds configuration
//! only; every method is a pure function of its arguments, safe to call
//! concurrently. Callers serialize review updates per item themselves --
//! the interval/ease transition is a fold over quality scores.

use chrono::NaiveDateTime;

use crate::assessment::{assess_attention_span, classify_fatigue, FatigueAssessment};
use crate::config::OptimizerConfig;
use crate::error::EngineError;
use crate::interleaving::{analyze_feedback, plan_interleaving, InterleavingFeedback};
use crate::intervention::{
    adaptive_trigger, fatigue_intervention, FatigueIntervention, InterventionTrigger,
    TriggerContext,
};
use crate::profile::base_parameters;
use crate::session::{build_schedule, session_quality};
use crate::spacing::{apply_review, ReviewContext, ReviewUpdate, SchedulingPolicy};
use crate::types::{
    InterleavingSegment, LearnerProfile, ReviewItem, SessionOutcome, StudySchedule, Topic,
};

#[derive(Debug, Clone, Default)]
pub struct StudyOptimizer {
    config: OptimizerConfig,
}

impl StudyOptimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Full session schedule for a learner; cheap and deterministic, so
    /// recompute on demand rather than caching.
    pub fn schedule(&self, profile: &LearnerProfile) -> StudySchedule {
        let schedule = build_schedule(&self.config.session, profile);
        tracing::debug!(
            learner = %profile.id,
            session_length = schedule.session_length,
            break_duration = schedule.break_duration,
            "computed study schedule"
        );
        schedule
    }

    /// Sustained-attention span in seconds from a SART-style sample stream.
    pub fn assess_attention_span(
        &self,
        response_times: &[f64],
        errors: &[u8],
    ) -> Result<f64, EngineError> {
        assess_attention_span(response_times, errors)
    }

    /// Real-time fatigue tier and recommended action.
    pub fn classify_fatigue(
        &self,
        response_times: &[f64],
        error_rates: &[f64],
        self_reported: f64,
    ) -> FatigueAssessment {
        let assessment =
            classify_fatigue(&self.config.fatigue, response_times, error_rates, self_reported);
        tracing::debug!(
            score = assessment.score,
            tier = assessment.tier.as_str(),
            confidence = assessment.confidence,
            "classified fatigue"
        );
        assessment
    }

    /// Fold one review with an explicit 0-5 quality score into the item.
    pub fn review(
        &self,
        item: &ReviewItem,
        quality: f64,
        profile: &LearnerProfile,
        policy: SchedulingPolicy,
        context: &ReviewContext<'_>,
        now: NaiveDateTime,
    ) -> Result<ReviewUpdate, EngineError> {
        let update = apply_review(&self.config, item, quality, profile.age, policy, context, now)?;
        tracing::debug!(
            subject = %item.subject,
            quality,
            interval = update.item.interval,
            ease_factor = update.item.ease_factor,
            "applied review"
        );
        Ok(update)
    }

    /// Score a finished session and fold it into the item's review state.
    /// `item` is `None` on the first completed session for a subject.
    #[allow(clippy::too_many_arguments)]
    pub fn complete_session(
        &self,
        item: Option<&ReviewItem>,
        subject: &str,
        outcome: &SessionOutcome,
        profile: &LearnerProfile,
        policy: SchedulingPolicy,
        context: &ReviewContext<'_>,
        now: NaiveDateTime,
    ) -> Result<ReviewUpdate, EngineError> {
        let quality = session_quality(outcome);
        let fresh;
        let item = match item {
            Some(existing) => existing,
            None => {
                fresh = ReviewItem::new(subject);
                &fresh
            }
        };
        self.review(item, quality, profile, policy, context, now)
    }

    /// Ordered, time-boxed topic segments for one multi-topic session.
    pub fn plan_interleaving(
        &self,
        topics: &[Topic],
        available_minutes: f64,
        profile: &LearnerProfile,
        now: NaiveDateTime,
    ) -> Vec<InterleavingSegment> {
        let capacity = base_parameters(profile).working_memory_capacity;
        let plan = plan_interleaving(
            &self.config.interleaving,
            topics,
            available_minutes,
            capacity,
            now,
        );
        tracing::debug!(
            learner = %profile.id,
            topics = topics.len(),
            segments = plan.len(),
            "planned interleaving"
        );
        plan
    }

    /// Offline scoring of whether interleaving is helping.
    pub fn interleaving_feedback(&self, history: &[InterleavingSegment]) -> InterleavingFeedback {
        analyze_feedback(history)
    }

    /// Intervention descriptor for a mid-session fatigue report, if one is
    /// warranted.
    pub fn fatigue_intervention(
        &self,
        level: f64,
        minutes_elapsed: f64,
        planned_duration: f64,
    ) -> Option<FatigueIntervention> {
        fatigue_intervention(level, minutes_elapsed, planned_duration)
    }

    /// Context-appropriate nudge for the notification collaborator.
    pub fn adaptive_trigger(
        &self,
        motivation: f64,
        ability: f64,
        context: TriggerContext,
    ) -> InterventionTrigger {
        adaptive_trigger(motivation, ability, context)
    }
}
