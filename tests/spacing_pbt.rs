//! Property tests for the interval engine and fatigue classifier.

use gentle_algo::config::{FatigueThresholds, LectorClamps, OptimizerConfig, Sm2Params};
use gentle_algo::assessment::classify_fatigue;
use gentle_algo::spacing::lector::{self, LectorFactors};
use gentle_algo::spacing::sm2;
use proptest::prelude::*;

proptest! {
    /// For any sequence of qualities the ease factor never drops below 1.3.
    #[test]
    fn ease_factor_never_below_floor(qualities in prop::collection::vec(0.0f64..=5.0, 1..50)) {
        let params = Sm2Params::default();
        let mut ease = 2.5;
        for q in qualities {
            ease = sm2::update_ease_factor(&params, ease, q);
            prop_assert!(ease >= 1.3);
        }
    }

    /// Successful recall never shrinks a grown interval.
    #[test]
    fn sm2_growth_is_monotone(
        interval in 2.0f64..365.0,
        ease in 1.3f64..3.5,
        quality in 3.0f64..=5.0,
    ) {
        let params = Sm2Params::default();
        let interval = interval.round();
        let next = sm2::next_interval(&params, interval, ease, quality);
        prop_assert!(next >= interval);
    }

    /// Failed recall always resets to one day.
    #[test]
    fn sm2_lapse_always_resets(
        interval in 0.0f64..365.0,
        ease in 1.3f64..3.5,
        quality in 0.0f64..3.0,
    ) {
        let params = Sm2Params::default();
        prop_assert_eq!(sm2::next_interval(&params, interval.round(), ease, quality), 1.0);
    }

    /// The LECTOR output is at least one day for any factor inputs, and the
    /// total scaling stays within the product of the documented clamps.
    #[test]
    fn lector_interval_is_clamped_and_positive(
        base in 1.0f64..365.0,
        semantic in -5.0f64..5.0,
        mastery in -5.0f64..5.0,
        reps in 0u32..500,
        personal in -5.0f64..5.0,
        age in 5u32..95,
    ) {
        let clamps = LectorClamps::default();
        let base = base.round();
        let factors = LectorFactors {
            semantic,
            mastery,
            repetition_count: reps,
            personal,
            age,
        };
        let next = lector::next_interval(&clamps, base, &factors);
        prop_assert!(next >= 1.0);
        // Upper bound: 1.2 * 2.0 * 1.1 * 1.5 with no age shrink.
        prop_assert!(next <= (base * 1.2 * 2.0 * 1.1 * 1.5).round() + 1.0);
        // Lower bound: 0.8 * 0.5 * 0.9 * 0.7 with the strongest age shrink.
        prop_assert!(next >= (base * 0.8 * 0.5 * 0.9 * 0.7 * 0.85).floor().max(1.0) - 1.0);
    }

    /// Raising the self-report while holding trends fixed never lowers the
    /// fatigue tier.
    #[test]
    fn fatigue_tier_monotone_in_self_report(
        rts in prop::collection::vec(200.0f64..4000.0, 3..12),
        errs in prop::collection::vec(0.0f64..1.0, 3..12),
    ) {
        let thresholds = FatigueThresholds::default();
        let mut last = classify_fatigue(&thresholds, &rts, &errs, 1.0).tier;
        for report in 2..=10 {
            let tier = classify_fatigue(&thresholds, &rts, &errs, report as f64).tier;
            prop_assert!(tier >= last);
            last = tier;
        }
    }

    /// A full review fold keeps both item invariants for arbitrary quality
    /// sequences.
    #[test]
    fn review_fold_preserves_invariants(qualities in prop::collection::vec(0.0f64..=5.0, 1..30)) {
        use chrono::NaiveDate;
        use gentle_algo::spacing::{apply_review, ReviewContext, SchedulingPolicy};
        use gentle_algo::ReviewItem;

        let config = OptimizerConfig::default();
        let now = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap().and_hms_opt(9, 0, 0).unwrap();
        let mut item = ReviewItem::new("subject");
        for q in qualities {
            let update = apply_review(
                &config,
                &item,
                q,
                30,
                SchedulingPolicy::Lector,
                &ReviewContext::default(),
                now,
            ).unwrap();
            item = update.item;
            prop_assert!(item.ease_factor >= 1.3);
            prop_assert!(item.interval >= 1.0);
        }
    }
}
