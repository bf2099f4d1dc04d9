//! Classic SM-2 scheduling: interval progression {1, 6, round(I * EF)} and
//! the quadratic-penalty ease update with a 1.3 floor.

use crate::config::Sm2Params;

/// Next interval in days for a 0-5 recall quality.
///
/// Quality below the pass threshold is a lapse: the interval resets to one
/// day regardless of how long it had grown (the ease factor still updates).
pub fn next_interval(params: &Sm2Params, current_interval: f64, ease_factor: f64, quality: f64) -> f64 {
    if quality < params.pass_threshold {
        return params.first_interval;
    }
    if current_interval == 0.0 {
        params.first_interval
    } else if current_interval == 1.0 {
        params.second_interval
    } else {
        (current_interval * ease_factor).round()
    }
}

/// Ease update applied on every review, pass or fail:
/// `ef' = max(floor, ef + 0.1 - (5-q)(0.08 + (5-q)0.02))`.
///
/// The floor prevents runaway shrinking for a habitually weak learner.
pub fn update_ease_factor(params: &Sm2Params, ease_factor: f64, quality: f64) -> f64 {
    let miss = 5.0 - quality;
    let updated = ease_factor + 0.1 - miss * (0.08 + miss * 0.02);
    updated.max(params.ease_floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_progression_scenario() {
        let p = Sm2Params::default();
        assert_eq!(next_interval(&p, 0.0, 2.5, 4.0), 1.0);
        assert_eq!(next_interval(&p, 1.0, 2.5, 4.0), 6.0);
        assert_eq!(next_interval(&p, 6.0, 2.5, 4.0), 15.0);
    }

    #[test]
    fn lapse_resets_to_one_day() {
        let p = Sm2Params::default();
        assert_eq!(next_interval(&p, 30.0, 2.5, 2.0), 1.0);
        assert_eq!(next_interval(&p, 0.0, 2.5, 0.0), 1.0);
    }

    #[test]
    fn perfect_recall_grows_ease() {
        let p = Sm2Params::default();
        let ef = update_ease_factor(&p, 2.5, 5.0);
        assert!((ef - 2.6).abs() < 1e-9);
    }

    #[test]
    fn quality_four_leaves_ease_unchanged() {
        let p = Sm2Params::default();
        let ef = update_ease_factor(&p, 2.5, 4.0);
        assert!((ef - 2.5).abs() < 1e-9);
    }

    #[test]
    fn ease_never_drops_below_floor() {
        let p = Sm2Params::default();
        let mut ef = 2.5;
        for _ in 0..50 {
            ef = update_ease_factor(&p, ef, 0.0);
        }
        assert!(ef >= 1.3);
        assert!((ef - 1.3).abs() < 1e-9);
    }
}
