//! # gentle-algo - adaptive study scheduling algorithms
//!
//! Pure computation library that turns a learner profile and a stream of
//! performance observations into:
//!
//! - **Session planning** - attention-span and chronotype aware session,
//!   break, and daily-cap parameters
//! - **Spaced repetition** - classic SM-2 and the extended LECTOR
//!   multiplicative interval model, folded over per-subject review state
//! - **Assessment** - SART sustained-attention scoring and real-time
//!   fatigue classification with intervention tiers
//! - **Interleaving** - scored multi-topic segment scheduling and an
//!   effectiveness analyzer
//!
//! The engine is deterministic and side-effect free: no storage, no timers,
//! no notification delivery. Callers persist the returned records and apply
//! review updates in session-completion order.
//!
//! ## Example
//!
//! ```rust
//! use gentle_algo::{LearnerProfile, StudyOptimizer};
//!
//! let optimizer = StudyOptimizer::default();
//! let profile = LearnerProfile::new("learner-1", "Dana", 30);
//! let schedule = optimizer.schedule(&profile);
//! assert_eq!(schedule.session_length, 52.0);
//! assert_eq!(schedule.break_duration, 17.0);
//! ```

pub mod assessment;
pub mod chronotype;
pub mod config;
pub mod engine;
pub mod error;
pub mod interleaving;
pub mod intervention;
pub mod profile;
pub mod session;
pub mod spacing;
pub mod types;

pub use assessment::{FatigueAssessment, FatigueTier, RecommendedAction};
pub use config::OptimizerConfig;
pub use engine::StudyOptimizer;
pub use error::EngineError;
pub use intervention::{FatigueIntervention, InterventionTrigger, TriggerContext, TriggerKind};
pub use interleaving::InterleavingFeedback;
pub use spacing::{ReviewContext, ReviewUpdate, SchedulingPolicy};
pub use types::*;
