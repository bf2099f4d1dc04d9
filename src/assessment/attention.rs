//! Sustained-attention span from a SART-style timed task: the longest run
//! of fast-and-accurate trials, scored in 3-second trial slots.

use crate::error::EngineError;

/// Seconds each trial slot represents.
const TRIAL_SECONDS: f64 = 3.0;

/// Estimate the sustained attention span in seconds from parallel
/// response-time (ms) and binary error streams.
///
/// A trial extends the current streak when it is error-free and its response
/// time sits within one standard deviation of the mean; anything else resets
/// the streak. The result is the longest streak times the trial length.
/// Empty input yields 0; streams of unequal length are rejected.
pub fn assess_attention_span(response_times: &[f64], errors: &[u8]) -> Result<f64, EngineError> {
    if response_times.len() != errors.len() {
        return Err(EngineError::MismatchedSampleStreams {
            response_times: response_times.len(),
            errors: errors.len(),
        });
    }
    if response_times.is_empty() {
        return Ok(0.0);
    }

    let n = response_times.len() as f64;
    let mean = response_times.iter().sum::<f64>() / n;
    let std = (response_times.iter().map(|rt| (rt - mean).powi(2)).sum::<f64>() / n).sqrt();

    let mut streak = 0u32;
    let mut max_streak = 0u32;
    for (rt, error) in response_times.iter().zip(errors) {
        if *error == 0 && (rt - mean).abs() <= std {
            streak += 1;
            max_streak = max_streak.max(streak);
        } else {
            streak = 0;
        }
    }

    Ok(max_streak as f64 * TRIAL_SECONDS)
}
