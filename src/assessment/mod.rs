//! Attention and fatigue assessment over raw performance samples.

pub mod attention;
pub mod fatigue;

pub use attention::assess_attention_span;
pub use fatigue::{classify_fatigue, FatigueAssessment, FatigueTier, RecommendedAction};
