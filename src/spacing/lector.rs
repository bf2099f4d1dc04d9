//! LECTOR extended interval model: the SM-2 base interval scaled by
//! semantic-interference, mastery, repetition, and personal-consistency
//! factors, each clamped to its documented range, plus an age adjustment.

use crate::config::LectorClamps;

/// Inputs to one LECTOR interval computation. Factors arrive raw; clamping
/// happens here so callers cannot push the model outside its ranges.
#[derive(Debug, Clone, Copy)]
pub struct LectorFactors {
    /// Raw semantic-interference factor (see `spacing::interference`).
    pub semantic: f64,
    /// Raw mastery factor (see `spacing::metrics`).
    pub mastery: f64,
    pub repetition_count: u32,
    /// Raw personal-consistency factor (see `spacing::metrics`).
    pub personal: f64,
    /// Learner age in years.
    pub age: u32,
}

/// Age scaling: minors and older learners review a little sooner.
fn age_adjustment(age: u32) -> f64 {
    if age < 18 {
        0.85
    } else if age > 60 {
        0.9
    } else {
        1.0
    }
}

/// Extended interval in whole days, never below one.
pub fn next_interval(clamps: &LectorClamps, base_interval: f64, factors: &LectorFactors) -> f64 {
    let semantic = factors.semantic.clamp(clamps.semantic_min, clamps.semantic_max);
    let mastery = factors.mastery.clamp(clamps.mastery_min, clamps.mastery_max);
    let repetition = (1.0 + 0.02 * factors.repetition_count as f64)
        .clamp(clamps.repetition_min, clamps.repetition_max);
    let personal = factors.personal.clamp(clamps.personal_min, clamps.personal_max);

    let scaled = base_interval * semantic * mastery * repetition * personal * age_adjustment(factors.age);
    scaled.max(1.0).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neutral(age: u32) -> LectorFactors {
        LectorFactors {
            semantic: 1.0,
            mastery: 1.0,
            repetition_count: 0,
            personal: 1.0,
            age,
        }
    }

    #[test]
    fn neutral_factors_keep_the_base_interval() {
        let clamps = LectorClamps::default();
        assert_eq!(next_interval(&clamps, 6.0, &neutral(30)), 6.0);
    }

    #[test]
    fn interval_never_drops_below_one_day() {
        let clamps = LectorClamps::default();
        let factors = LectorFactors {
            semantic: 0.0,
            mastery: 0.0,
            personal: 0.0,
            ..neutral(10)
        };
        assert!(next_interval(&clamps, 1.0, &factors) >= 1.0);
    }

    #[test]
    fn extreme_factors_are_clamped() {
        let clamps = LectorClamps::default();
        let factors = LectorFactors {
            semantic: 10.0,
            mastery: 10.0,
            repetition_count: 1000,
            personal: 10.0,
            ..neutral(30)
        };
        // 10 * 1.2 * 2.0 * 1.1 * 1.5 = 39.6
        assert_eq!(next_interval(&clamps, 10.0, &factors), 40.0);
    }

    #[test]
    fn minors_and_elders_review_sooner() {
        let clamps = LectorClamps::default();
        let adult = next_interval(&clamps, 20.0, &neutral(30));
        let minor = next_interval(&clamps, 20.0, &neutral(12));
        let elder = next_interval(&clamps, 20.0, &neutral(70));
        assert!(minor < adult);
        assert!(elder < adult);
        assert_eq!(minor, 17.0); // 20 * 0.85
        assert_eq!(elder, 18.0); // 20 * 0.9
    }

    #[test]
    fn repetitions_nudge_the_interval_up() {
        let clamps = LectorClamps::default();
        let few = next_interval(&clamps, 50.0, &neutral(30));
        let many = next_interval(
            &clamps,
            50.0,
            &LectorFactors {
                repetition_count: 5,
                ..neutral(30)
            },
        );
        assert!(many > few); // 50 vs 55
    }
}
