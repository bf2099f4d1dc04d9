//! Session parameter synthesis: combines base cognitive parameters,
//! chronotype timing, and study intensity into a full `StudySchedule`,
//! and scores finished sessions on the 0-5 recall-quality scale.

use serde::{Deserialize, Serialize};

use crate::chronotype::chronotype_adjustment;
use crate::config::SessionParams;
use crate::profile::{base_parameters, BaseParameters};
use crate::types::{LearnerProfile, SessionOutcome, StudyIntensity, StudySchedule};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionParameters {
    pub session_length: f64,
    pub break_duration: f64,
    pub max_concepts: u32,
}

/// Session and break lengths, evaluated in priority order:
/// the 18-60 age band locks in the 52/17 focus block (intensive study only
/// shortens the break), then intensive, then casual pacing.
pub fn session_parameters(
    params: &SessionParams,
    base: &BaseParameters,
    profile: &LearnerProfile,
) -> SessionParameters {
    let (session_length, break_duration) = if (18..=60).contains(&profile.age) {
        let session = params.optimal_work;
        let brk = match profile.study_intensity {
            StudyIntensity::Intensive => params.optimal_break.min(session * params.intensive_break_ratio),
            StudyIntensity::Casual => params.optimal_break,
        };
        (session, brk)
    } else if profile.study_intensity == StudyIntensity::Intensive {
        let session = base.attention_span.min(params.intensive_cap);
        (session, session * params.intensive_break_ratio)
    } else {
        let session = base.attention_span.min(params.ultradian_cycle * 0.8);
        (session, session * params.casual_break_ratio)
    };

    SessionParameters {
        session_length,
        break_duration,
        max_concepts: max_concepts(base.working_memory_capacity, profile.age),
    }
}

/// Cognitive-load ceiling: 3 new concepts for minors, 4 for adults,
/// and never more than 80% of measured capacity.
fn max_concepts(capacity: f64, age: u32) -> u32 {
    let from_capacity = (capacity * 0.8).floor() as u32;
    let ceiling = if age < 18 { 3 } else { 4 };
    from_capacity.min(ceiling)
}

/// Fixed daily ceiling in minutes, independent of session synthesis.
pub fn max_daily_study_time(profile: &LearnerProfile) -> u32 {
    if profile.age < 15 {
        120
    } else if profile.age < 18 {
        180
    } else if profile.study_intensity == StudyIntensity::Intensive {
        360
    } else {
        240
    }
}

/// Suggested break activities, tiered by how long the break is.
pub fn break_activities(break_duration: f64) -> Vec<String> {
    let suggestions: &[&str] = if break_duration < 5.0 {
        &["Look away from the screen", "View something natural", "Deep breaths"]
    } else if break_duration < 15.0 {
        &["Stretch", "Hydrate", "Step away from your desk"]
    } else {
        &["Take a short walk", "Light movement", "Rest without screens"]
    };
    suggestions.iter().map(|s| s.to_string()).collect()
}

/// Full schedule for one learner. Pure function of the profile; recompute on
/// demand rather than caching.
pub fn build_schedule(params: &SessionParams, profile: &LearnerProfile) -> StudySchedule {
    let base = base_parameters(profile);
    let timing = chronotype_adjustment(profile.chronotype, profile.chronotype_score);
    let session = session_parameters(params, &base, profile);

    StudySchedule {
        session_length: session.session_length,
        break_duration: session.break_duration,
        optimal_start_time: timing.optimal_start_time,
        peak_performance_windows: timing.peak_windows,
        max_daily_study_time: max_daily_study_time(profile),
        max_concepts: session.max_concepts,
        microbreak_interval: params.microbreak_interval,
        microbreak_duration: params.microbreak_duration,
        break_activities: break_activities(session.break_duration),
    }
}

/// Score a finished session on the 0-5 recall-quality scale from completion
/// rate, self-reported fatigue, focus, and break discipline.
pub fn session_quality(outcome: &SessionOutcome) -> f64 {
    let completion_rate = if outcome.planned_duration > 0.0 {
        (outcome.actual_duration / outcome.planned_duration * 100.0).min(100.0)
    } else {
        0.0
    };

    let mut quality = 3.0;

    if completion_rate >= 90.0 {
        quality += 1.0;
    } else if completion_rate >= 70.0 {
        quality += 0.5;
    } else if completion_rate < 50.0 {
        quality -= 1.0;
    }

    // Fatigue acts inversely: a fresh learner earns up to +0.9.
    quality += (10.0 - outcome.self_reported_fatigue) / 10.0;

    if outcome.focus_score >= 80.0 {
        quality += 0.5;
    } else if outcome.focus_score < 60.0 {
        quality -= 0.5;
    }

    // One break per planned hour is on-plan.
    let expected_breaks = (outcome.planned_duration / 60.0).floor() as u32;
    if outcome.breaks_taken <= expected_breaks {
        quality += 0.3;
    } else {
        quality -= 0.3;
    }

    quality.clamp(0.0, 5.0)
}
