//! Base cognitive parameters derived from age and assessment results.
//!
//! Age bands follow the sustained-attention literature; the 26-60 band is
//! anchored to the empirically observed 52-minute focus block.

use serde::{Deserialize, Serialize};

use crate::types::LearnerProfile;

/// Banded attention span cap for minors, minutes.
const MINOR_SPAN_CAP: f64 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseParameters {
    /// Sustainable focus in minutes.
    pub attention_span: f64,
    /// Working-memory capacity in chunks.
    pub working_memory_capacity: f64,
}

/// Derive attention span and working-memory capacity from the profile.
///
/// A measured sustained-attention result (seconds) is blended 50/50 with the
/// banded estimate; a measured working-memory capacity overrides it outright.
pub fn base_parameters(profile: &LearnerProfile) -> BaseParameters {
    let age = profile.age;
    let (mut attention_span, mut capacity) = if age < 18 {
        (
            (age as f64 * 3.0).min(MINOR_SPAN_CAP),
            2.0 + (age as f64 - 7.0) * 0.2,
        )
    } else if age <= 25 {
        (50.0, 4.0)
    } else if age <= 60 {
        (52.0, 4.0)
    } else {
        (40.0, 3.5)
    };

    if let Some(measured_seconds) = profile.sustained_attention_span {
        attention_span = (attention_span + measured_seconds / 60.0) / 2.0;
    }

    if let Some(measured_capacity) = profile.working_memory_capacity {
        capacity = measured_capacity;
    }

    BaseParameters {
        attention_span,
        working_memory_capacity: capacity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(age: u32) -> LearnerProfile {
        LearnerProfile::new("u1", "test", age)
    }

    #[test]
    fn child_span_scales_with_age_up_to_cap() {
        assert_eq!(base_parameters(&profile(10)).attention_span, 30.0);
        assert_eq!(base_parameters(&profile(17)).attention_span, 45.0);
    }

    #[test]
    fn child_capacity_grows_from_age_seven() {
        let params = base_parameters(&profile(12));
        assert!((params.working_memory_capacity - 3.0).abs() < 1e-9);
    }

    #[test]
    fn adult_bands() {
        assert_eq!(base_parameters(&profile(22)).attention_span, 50.0);
        assert_eq!(base_parameters(&profile(40)).attention_span, 52.0);
        assert_eq!(base_parameters(&profile(70)).attention_span, 40.0);
        assert_eq!(base_parameters(&profile(70)).working_memory_capacity, 3.5);
    }

    #[test]
    fn measured_attention_blends_fifty_fifty() {
        let mut p = profile(40);
        p.sustained_attention_span = Some(30.0 * 60.0);
        // (52 + 30) / 2
        assert_eq!(base_parameters(&p).attention_span, 41.0);
    }

    #[test]
    fn measured_capacity_overrides() {
        let mut p = profile(40);
        p.working_memory_capacity = Some(2.5);
        assert_eq!(base_parameters(&p).working_memory_capacity, 2.5);
    }
}
