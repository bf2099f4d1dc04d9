use serde::{Deserialize, Serialize};

/// Session synthesis constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionParams {
    /// Ultradian rest-activity cycle length in minutes.
    pub ultradian_cycle: f64,
    /// DeskTime 52/17 focus block: minutes of work.
    pub optimal_work: f64,
    /// DeskTime 52/17 focus block: minutes of break.
    pub optimal_break: f64,
    /// Session ceiling under intensive study.
    pub intensive_cap: f64,
    /// Break as a fraction of session length, intensive.
    pub intensive_break_ratio: f64,
    /// Break as a fraction of session length, casual.
    pub casual_break_ratio: f64,
    /// Minutes between microbreaks.
    pub microbreak_interval: u32,
    /// Microbreak length in seconds.
    pub microbreak_duration: u32,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            ultradian_cycle: 90.0,
            optimal_work: 52.0,
            optimal_break: 17.0,
            intensive_cap: 45.0,
            intensive_break_ratio: 0.15,
            casual_break_ratio: 0.22,
            microbreak_interval: 15,
            microbreak_duration: 40,
        }
    }
}

/// SM-2 constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sm2Params {
    /// Floor below which the ease factor never drops.
    pub ease_floor: f64,
    /// Interval after the first successful recall, days.
    pub first_interval: f64,
    /// Interval after the second successful recall, days.
    pub second_interval: f64,
    /// Quality below this counts as a lapse.
    pub pass_threshold: f64,
}

impl Default for Sm2Params {
    fn default() -> Self {
        Self {
            ease_floor: 1.3,
            first_interval: 1.0,
            second_interval: 6.0,
            pass_threshold: 3.0,
        }
    }
}

/// Clamp ranges for the LECTOR multiplicative factors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LectorClamps {
    pub semantic_min: f64,
    pub semantic_max: f64,
    pub mastery_min: f64,
    pub mastery_max: f64,
    pub repetition_min: f64,
    pub repetition_max: f64,
    pub personal_min: f64,
    pub personal_max: f64,
}

impl Default for LectorClamps {
    fn default() -> Self {
        Self {
            semantic_min: 0.8,
            semantic_max: 1.2,
            mastery_min: 0.5,
            mastery_max: 2.0,
            repetition_min: 0.9,
            repetition_max: 1.1,
            personal_min: 0.7,
            personal_max: 1.5,
        }
    }
}

/// Additive fatigue-score thresholds. Each category is a monotone ladder:
/// the highest matching threshold wins, categories are independent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FatigueThresholds {
    /// Response-time trend thresholds in ms, worth 1/2/3 points.
    pub rt_trend: [f64; 3],
    /// Error-rate trend thresholds, worth 1/2/3 points.
    pub error_trend: [f64; 3],
    /// Self-reported fatigue thresholds, worth 1/2/3/4 points.
    pub self_report: [f64; 4],
    /// Tier boundaries on the 0-10 total: low <= b0, moderate <= b1, high <= b2.
    pub tier_bounds: [u32; 3],
    /// Samples over which trends are measured.
    pub window: usize,
    /// Below this many history samples the classifier stays at continue.
    pub min_samples: usize,
}

impl Default for FatigueThresholds {
    fn default() -> Self {
        Self {
            rt_trend: [100.0, 200.0, 500.0],
            error_trend: [0.05, 0.1, 0.2],
            self_report: [2.0, 4.0, 6.0, 8.0],
            tier_bounds: [2, 4, 7],
            window: 5,
            min_samples: 3,
        }
    }
}

/// Interleaving scheduler constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterleavingParams {
    /// Longest single segment in minutes.
    pub max_segment: f64,
    /// Stop once this little session time remains.
    pub min_remaining: f64,
    /// Ceiling on concurrently interleaved topics.
    pub max_topics: usize,
    /// Days after which a topic counts as fully stale.
    pub staleness_window_days: f64,
    /// Extra minutes per difficulty point above the 1-5 midpoint, fractional.
    pub difficulty_slope: f64,
}

impl Default for InterleavingParams {
    fn default() -> Self {
        Self {
            max_segment: 15.0,
            min_remaining: 5.0,
            max_topics: 3,
            staleness_window_days: 7.0,
            difficulty_slope: 0.1,
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OptimizerConfig {
    pub session: SessionParams,
    pub sm2: Sm2Params,
    pub lector: LectorClamps,
    pub fatigue: FatigueThresholds,
    pub interleaving: InterleavingParams,
}
