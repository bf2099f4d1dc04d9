//! End-to-end scenarios through the `StudyOptimizer` facade.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use gentle_algo::spacing::{ReviewContext, SchedulingPolicy};
use gentle_algo::{
    Chronotype, LearnerProfile, ReviewItem, StudyIntensity, StudyOptimizer, Topic,
};

fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 2)
        .unwrap()
        .and_hms_opt(14, 0, 0)
        .unwrap()
}

fn casual_morning_adult() -> LearnerProfile {
    LearnerProfile {
        chronotype: Chronotype::Morning,
        chronotype_score: 4.0,
        study_intensity: StudyIntensity::Casual,
        ..LearnerProfile::new("u1", "Dana", 30)
    }
}

#[test]
fn morning_adult_schedule_scenario() {
    let optimizer = StudyOptimizer::default();
    let schedule = optimizer.schedule(&casual_morning_adult());

    assert_eq!(schedule.session_length, 52.0);
    assert_eq!(schedule.break_duration, 17.0);
    assert_eq!(schedule.optimal_start_time, 660.0);
    assert_eq!(schedule.peak_performance_windows.len(), 2);
    assert_eq!(schedule.peak_performance_windows[0].start, 480);
    assert_eq!(schedule.peak_performance_windows[0].end, 720);
    assert_eq!(schedule.peak_performance_windows[1].start, 840);
    assert_eq!(schedule.peak_performance_windows[1].end, 960);
    assert_eq!(schedule.max_daily_study_time, 240);
    assert_eq!(schedule.max_concepts, 3); // floor(4 * 0.8)
}

#[test]
fn session_parameter_age_boundaries() {
    let optimizer = StudyOptimizer::default();
    for age in [18, 60] {
        let profile = LearnerProfile::new("u1", "test", age);
        let schedule = optimizer.schedule(&profile);
        assert_eq!(schedule.session_length, 52.0, "age {age}");
        assert_eq!(schedule.break_duration, 17.0, "age {age}");
    }
}

#[test]
fn sm2_review_chain_scenario() {
    let optimizer = StudyOptimizer::default();
    let profile = casual_morning_adult();
    let context = ReviewContext::default();
    let mut item = ReviewItem::new("probability");

    for expected in [1.0, 6.0, 15.0] {
        let update = optimizer
            .review(&item, 4.0, &profile, SchedulingPolicy::Sm2, &context, fixed_now())
            .unwrap();
        assert_eq!(update.item.interval, expected);
        assert_eq!(update.item.ease_factor, 2.5); // quality 4 leaves ease unchanged
        item = update.item;
    }

    let next = item.next_review.unwrap();
    assert_eq!(next.hour(), 10);
    assert_eq!(next.date(), NaiveDate::from_ymd_opt(2026, 3, 17).unwrap());
}

#[test]
fn interleaving_two_topic_scenario() {
    let optimizer = StudyOptimizer::default();
    let profile = casual_morning_adult();
    let topics = vec![
        Topic {
            id: "hard".into(),
            name: "Organic chemistry".into(),
            difficulty: 5.0,
            time_required: 30.0,
            last_studied: None,
            mastery_level: None,
        },
        Topic {
            id: "easy".into(),
            name: "Vocabulary".into(),
            difficulty: 1.0,
            time_required: 30.0,
            last_studied: None,
            mastery_level: None,
        },
    ];

    let plan = optimizer.plan_interleaving(&topics, 40.0, &profile, fixed_now());

    let total: f64 = plan.iter().map(|s| s.duration).sum();
    assert!(total <= 40.0);
    for pair in plan.windows(2) {
        assert_ne!(pair[0].topic_id, pair[1].topic_id, "segments must alternate");
    }

    let first_hard = plan.iter().find(|s| s.topic_id == "hard").unwrap();
    let first_easy = plan.iter().find(|s| s.topic_id == "easy").unwrap();
    assert!(first_hard.duration >= first_easy.duration);
    assert!(plan.iter().all(|s| !s.rationale.is_empty()));
}

#[test]
fn all_error_assessment_yields_zero_span() {
    let optimizer = StudyOptimizer::default();
    let rts = vec![600.0; 8];
    let errors = vec![1u8; 8];
    assert_eq!(optimizer.assess_attention_span(&rts, &errors).unwrap(), 0.0);
}

#[test]
fn measured_span_feeds_back_into_the_schedule() {
    let optimizer = StudyOptimizer::default();
    let mut profile = LearnerProfile::new("u1", "Dana", 70);

    let before = optimizer.schedule(&profile);
    // A strong assessment (60 minutes sustained) lengthens casual sessions.
    profile.sustained_attention_span = Some(60.0 * 60.0);
    let after = optimizer.schedule(&profile);
    assert!(before.session_length < after.session_length);
}

#[test]
fn planned_segments_feed_the_effectiveness_analyzer() {
    let optimizer = StudyOptimizer::default();
    let profile = casual_morning_adult();
    let topics = vec![
        Topic {
            id: "a".into(),
            name: "Algebra".into(),
            difficulty: 3.0,
            time_required: 30.0,
            last_studied: None,
            mastery_level: None,
        },
        Topic {
            id: "b".into(),
            name: "Biology".into(),
            difficulty: 3.0,
            time_required: 30.0,
            last_studied: None,
            mastery_level: None,
        },
    ];

    let mut plan = optimizer.plan_interleaving(&topics, 45.0, &profile, fixed_now());
    for (i, segment) in plan.iter_mut().enumerate() {
        segment.performance = Some(if segment.switched_from.is_some() { 0.9 } else { 0.6 });
        assert_eq!(segment.order, i as u32);
    }

    let feedback = optimizer.interleaving_feedback(&plan);
    assert!(feedback.switching_benefit > 0.0);
    assert!(feedback.average_performance > 0.0);
}

#[test]
fn adaptive_trigger_families() {
    let optimizer = StudyOptimizer::default();
    let spark = optimizer.adaptive_trigger(1.0, 1.0, gentle_algo::TriggerContext::Start);
    assert_eq!(spark.kind, gentle_algo::TriggerKind::Spark);
    let signal = optimizer.adaptive_trigger(8.0, 8.0, gentle_algo::TriggerContext::During);
    assert_eq!(signal.kind, gentle_algo::TriggerKind::Signal);
}

#[test]
fn fatigue_classification_drives_interventions() {
    let optimizer = StudyOptimizer::default();
    let rts = vec![500.0, 1200.0, 2100.0, 3000.0, 3600.0];
    let errs = vec![0.0, 0.2, 0.5, 0.8, 1.0];

    let assessment = optimizer.classify_fatigue(&rts, &errs, 9.0);
    assert_eq!(assessment.tier, gentle_algo::FatigueTier::Severe);

    let intervention = optimizer.fatigue_intervention(9.0, 30.0, 52.0).unwrap();
    assert!(intervention.start_break_now);
}
