use thiserror::Error;

/// Boundary errors for structurally invalid input. Degraded data (empty
/// streams, missing measurements) never errors; it falls back to the
/// documented neutral defaults instead.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("response-time and error streams must be parallel (got {response_times} response times, {errors} error flags)")]
    MismatchedSampleStreams { response_times: usize, errors: usize },

    #[error("recall quality {0} is outside the 0-5 scale")]
    QualityOutOfRange(f64),
}
