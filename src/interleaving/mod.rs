//! Topic interleaving: scheduling practice across multiple topics in short
//! alternating segments, plus the analyzer that checks whether it helps.

pub mod feedback;
pub mod scheduler;

pub use feedback::{analyze_feedback, InterleavingFeedback};
pub use scheduler::plan_interleaving;
