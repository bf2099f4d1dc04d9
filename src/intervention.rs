//! Just-in-time adaptive intervention descriptors for the notification
//! collaborator. The engine decides *that* and *when* an intervention is
//! warranted and returns a message payload; dispatch is external.
//!
//! Trigger selection follows the Fogg behavior model: low motivation and
//! low ability need a spark, motivated-but-stuck learners need a
//! facilitator, capable learners just need a signal.

use serde::{Deserialize, Serialize};

/// Below this level, motivation or ability counts as low (1-10 scales).
const LOW_LEVEL: f64 = 3.0;
/// Minutes into a session before a microbreak suggestion makes sense.
const MICROBREAK_ELIGIBLE_MINUTES: f64 = 15.0;
/// Shortest session the shortening advisory will ever suggest.
const MIN_SESSION_MINUTES: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerKind {
    Spark,
    Facilitator,
    Signal,
}

impl TriggerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spark => "spark",
            Self::Facilitator => "facilitator",
            Self::Signal => "signal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerContext {
    Start,
    During,
    Break,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterventionTrigger {
    pub kind: TriggerKind,
    pub message: String,
    pub action: String,
}

fn spark_message(context: TriggerContext) -> &'static str {
    match context {
        TriggerContext::Start => "Every expert was once a beginner. Start small and build momentum!",
        TriggerContext::During => "You're making progress! Each minute counts toward your goal.",
        TriggerContext::Break => "Great work! You've earned this break. Recharge and come back stronger.",
    }
}

fn facilitator_message(context: TriggerContext) -> &'static str {
    match context {
        TriggerContext::Start => "Everything is set up for you. Just open your materials and begin.",
        TriggerContext::During => "Focus on one concept at a time. You've got this!",
        TriggerContext::Break => "Step away from your desk. A short walk will refresh your mind.",
    }
}

fn signal_message(context: TriggerContext) -> &'static str {
    match context {
        TriggerContext::Start => "Time to study: Your scheduled session begins now.",
        TriggerContext::During => "Halfway through! Maintain your focus.",
        TriggerContext::Break => "Break time: Step away for optimal recovery.",
    }
}

/// Pick the trigger family from the motivation/ability quadrant and fill in
/// the context-specific message.
pub fn adaptive_trigger(
    motivation: f64,
    ability: f64,
    context: TriggerContext,
) -> InterventionTrigger {
    if motivation < LOW_LEVEL && ability < LOW_LEVEL {
        InterventionTrigger {
            kind: TriggerKind::Spark,
            message: spark_message(context).to_string(),
            action: "Start with just 5 minutes".to_string(),
        }
    } else if motivation >= LOW_LEVEL && ability < LOW_LEVEL {
        InterventionTrigger {
            kind: TriggerKind::Facilitator,
            message: facilitator_message(context).to_string(),
            action: "Your materials are ready".to_string(),
        }
    } else {
        InterventionTrigger {
            kind: TriggerKind::Signal,
            message: signal_message(context).to_string(),
            action: "Study time".to_string(),
        }
    }
}

/// Everything the notification collaborator needs to react to a fatigue
/// report mid-session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FatigueIntervention {
    pub title: String,
    pub message: String,
    /// Break should start immediately, not merely be suggested.
    pub start_break_now: bool,
    pub suggest_microbreak: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<InterventionTrigger>,
    /// Advisory future session length in minutes when the learner tires
    /// well before the midpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shorter_session_advice: Option<f64>,
}

/// React to a 1-10 self-reported fatigue level `minutes_elapsed` into a
/// session planned for `planned_duration` minutes. Levels below 4 warrant
/// no intervention.
pub fn fatigue_intervention(
    level: f64,
    minutes_elapsed: f64,
    planned_duration: f64,
) -> Option<FatigueIntervention> {
    // Tiring before the session midpoint suggests the plan itself is too long.
    let shorter_session_advice = (level >= 7.0 && minutes_elapsed < planned_duration * 0.5)
        .then(|| (planned_duration * 0.85).max(MIN_SESSION_MINUTES));

    if level >= 8.0 {
        Some(FatigueIntervention {
            title: "Critical Fatigue Detected".to_string(),
            message: "Starting immediate break to prevent burnout".to_string(),
            start_break_now: true,
            suggest_microbreak: false,
            trigger: None,
            shorter_session_advice,
        })
    } else if level >= 6.0 {
        // Fatigue drains motivation; ability is reduced to a fixed 3.
        let trigger = adaptive_trigger(10.0 - level, 3.0, TriggerContext::During);
        Some(FatigueIntervention {
            title: "High Fatigue Detected".to_string(),
            message: trigger.message.clone(),
            start_break_now: false,
            suggest_microbreak: minutes_elapsed >= MICROBREAK_ELIGIBLE_MINUTES,
            trigger: Some(trigger),
            shorter_session_advice,
        })
    } else if level >= 4.0 {
        Some(FatigueIntervention {
            title: "Take Care".to_string(),
            message: "Consider a short break or some deep breaths".to_string(),
            start_break_now: false,
            suggest_microbreak: false,
            trigger: None,
            shorter_session_advice,
        })
    } else {
        None
    }
}
