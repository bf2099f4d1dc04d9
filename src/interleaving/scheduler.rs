//! Multi-topic interleaving: selects the topics most worth alternating and
//! round-robins time-boxed segments between them. Works on its own copy of
//! the topic list; caller state is never aliased.

use chrono::NaiveDateTime;

use crate::config::InterleavingParams;
use crate::types::{InterleavingSegment, Topic};

/// Topic midpoint on the 1-5 difficulty scale.
const DIFFICULTY_MIDPOINT: f64 = 3.0;

struct WorkingTopic<'a> {
    topic: &'a Topic,
    remaining: f64,
}

/// Interleaving priority: rewards topics that are atypically difficult,
/// stale, or unmastered.
fn interleaving_score(params: &InterleavingParams, topic: &Topic, avg_difficulty: f64, now: NaiveDateTime) -> f64 {
    let difficulty_term = 0.3 * ((topic.difficulty - avg_difficulty).abs() / 5.0);

    let staleness_term = match topic.last_studied {
        Some(last) => {
            let days = (now - last).num_seconds() as f64 / 86_400.0;
            0.4 * (days / params.staleness_window_days).min(1.0)
        }
        None => 0.4,
    };

    let mastery_term = 1.0 - 0.3 * topic.mastery_level.unwrap_or(0.0);

    1.0 + difficulty_term + staleness_term + mastery_term
}

fn rationale(order: u32, topic: &Topic, avg_difficulty: f64) -> String {
    if order == 0 {
        if topic.difficulty >= avg_difficulty {
            format!(
                "Leading with {} while focus is fresh: it is the most demanding of today's topics",
                topic.name
            )
        } else {
            format!(
                "Leading with {} to build momentum before the harder material",
                topic.name
            )
        }
    } else {
        format!(
            "Switching to {} so the contrast sharpens discrimination and limits interference",
            topic.name
        )
    }
}

/// Produce an ordered, time-boxed segment sequence for one session.
///
/// A single candidate short-circuits to one segment. Otherwise the top
/// `min(capacity, topics, 3)` topics by interleaving score alternate in
/// round-robin; each visit allocates up to 15 minutes (stretched slightly
/// for harder topics), and scheduling stops when 5 minutes or less remain
/// or every selected topic is exhausted.
pub fn plan_interleaving(
    params: &InterleavingParams,
    topics: &[Topic],
    available_minutes: f64,
    working_memory_capacity: f64,
    now: NaiveDateTime,
) -> Vec<InterleavingSegment> {
    if topics.is_empty() || available_minutes <= 0.0 {
        return Vec::new();
    }

    if topics.len() == 1 {
        let only = &topics[0];
        return vec![InterleavingSegment {
            topic_id: only.id.clone(),
            duration: only.time_required.min(available_minutes),
            order: 0,
            rationale: rationale(0, only, only.difficulty),
            switched_from: None,
            performance: None,
        }];
    }

    let avg_difficulty =
        topics.iter().map(|t| t.difficulty).sum::<f64>() / topics.len() as f64;

    let mut ranked: Vec<&Topic> = topics.iter().collect();
    ranked.sort_by(|a, b| {
        let score_b = interleaving_score(params, b, avg_difficulty, now);
        let score_a = interleaving_score(params, a, avg_difficulty, now);
        score_b.partial_cmp(&score_a).unwrap_or(std::cmp::Ordering::Equal)
    });

    let active_limit = (working_memory_capacity.floor() as usize)
        .min(ranked.len())
        .min(params.max_topics)
        .max(1);

    let mut working: Vec<WorkingTopic<'_>> = ranked
        .into_iter()
        .take(active_limit)
        .map(|topic| WorkingTopic {
            topic,
            remaining: topic.time_required,
        })
        .collect();

    let mut segments = Vec::new();
    let mut session_remaining = available_minutes;
    let mut order: u32 = 0;
    let mut index = 0usize;
    let mut previous_topic: Option<String> = None;

    while session_remaining > params.min_remaining {
        let active_count = working.iter().filter(|w| w.remaining > 0.0).count();
        if active_count == 0 {
            break;
        }

        let slot_index = index % working.len();
        let slot = &mut working[slot_index];
        index += 1;
        if slot.remaining <= 0.0 {
            continue;
        }

        let base = params
            .max_segment
            .min(slot.remaining)
            .min(session_remaining)
            .min(session_remaining / active_count as f64);
        let adjusted = base
            * (1.0 + params.difficulty_slope * (slot.topic.difficulty - DIFFICULTY_MIDPOINT));
        let minutes = adjusted.round();
        if minutes < 1.0 {
            // Too small to be a useful segment; treat the topic as done.
            slot.remaining = 0.0;
            continue;
        }

        slot.remaining -= minutes;
        session_remaining -= minutes;

        let switched_from = previous_topic
            .take()
            .filter(|prev| prev != &slot.topic.id);
        segments.push(InterleavingSegment {
            topic_id: slot.topic.id.clone(),
            duration: minutes,
            order,
            rationale: rationale(order, slot.topic, avg_difficulty),
            switched_from,
            performance: None,
        });
        previous_topic = Some(slot.topic.id.clone());
        order += 1;
    }

    segments
}
