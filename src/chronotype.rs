//! Chronotype-driven timing: session start offset, peak-performance windows,
//! and the per-chronotype notification-time lookup.

use serde::{Deserialize, Serialize};

use crate::types::{Chronotype, PeakWindow};

/// Baseline start time, 10:00 as minutes from midnight.
const BASELINE_START: f64 = 600.0;
/// Minutes of shift per unit of chronotype-score deviation from neutral.
const SHIFT_PER_POINT: f64 = 60.0;
const NEUTRAL_SCORE: f64 = 3.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChronotypeAdjustment {
    /// Minutes from midnight.
    pub optimal_start_time: f64,
    pub peak_windows: Vec<PeakWindow>,
}

/// Map chronotype and 1-5 score to a start time and two peak windows.
///
/// The windows are a fixed lookup, not derived; the score only shifts the
/// start time (one hour per point of deviation from neutral). Scores are
/// clamped to the 1-5 scale.
pub fn chronotype_adjustment(chronotype: Chronotype, score: f64) -> ChronotypeAdjustment {
    let score = score.clamp(1.0, 5.0);
    let optimal_start_time = BASELINE_START + (score - NEUTRAL_SCORE) * SHIFT_PER_POINT;

    let peak_windows = match chronotype {
        Chronotype::Morning => vec![PeakWindow::new(480, 720), PeakWindow::new(840, 960)],
        Chronotype::Evening => vec![PeakWindow::new(660, 780), PeakWindow::new(1020, 1260)],
        Chronotype::Intermediate => vec![PeakWindow::new(600, 780), PeakWindow::new(900, 1020)],
    };

    ChronotypeAdjustment {
        optimal_start_time,
        peak_windows,
    }
}

/// Minutes-from-midnight at which reminders land best for each chronotype.
/// Advisory lookup for the notification collaborator; the engine dispatches
/// nothing itself.
pub fn optimal_notification_times(chronotype: Chronotype) -> [u32; 4] {
    match chronotype {
        Chronotype::Morning => [360, 480, 600, 840],
        Chronotype::Evening => [600, 780, 1020, 1320],
        Chronotype::Intermediate => [480, 660, 900, 1200],
    }
}
