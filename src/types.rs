use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Natural circadian preference affecting peak alertness timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Chronotype {
    Morning,
    Evening,
    #[default]
    Intermediate,
}

impl Chronotype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Evening => "evening",
            Self::Intermediate => "intermediate",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "morning" => Self::Morning,
            "evening" => Self::Evening,
            _ => Self::Intermediate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum StudyIntensity {
    Intensive,
    #[default]
    Casual,
}

impl StudyIntensity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Intensive => "intensive",
            Self::Casual => "casual",
        }
    }
}

/// Per-item difficulty tier derived from the last recall quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum DifficultyTier {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl DifficultyTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Tier for a 0-5 recall quality: >=4 easy, >=2.5 medium, else hard.
    pub fn from_quality(quality: f64) -> Self {
        if quality >= 4.0 {
            Self::Easy
        } else if quality >= 2.5 {
            Self::Medium
        } else {
            Self::Hard
        }
    }
}

/// Learner identity plus the demographic and self-test inputs the engine
/// derives everything else from. Owned by the caller; never mutated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerProfile {
    pub id: String,
    pub name: String,
    /// Age in whole years.
    pub age: u32,
    pub chronotype: Chronotype,
    /// Continuous 1-5 self-assessment, 3 = neutral.
    pub chronotype_score: f64,
    pub study_intensity: StudyIntensity,
    /// Measured sustained attention span in seconds, when an assessment ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sustained_attention_span: Option<f64>,
    /// Measured working-memory capacity in chunks (typically 2-4.5).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_memory_capacity: Option<f64>,
}

impl LearnerProfile {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            chronotype: Chronotype::Intermediate,
            chronotype_score: 3.0,
            study_intensity: StudyIntensity::Casual,
            sustained_attention_span: None,
            working_memory_capacity: None,
        }
    }
}

/// Half-open [start, end) minute-of-day range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakWindow {
    pub start: u32,
    pub end: u32,
}

impl PeakWindow {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, minute_of_day: u32) -> bool {
        minute_of_day >= self.start && minute_of_day < self.end
    }
}

/// Complete session plan for one learner; a pure function of the profile,
/// recomputed on demand and never persisted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySchedule {
    /// Minutes of focused work per session.
    pub session_length: f64,
    /// Minutes of rest between sessions.
    pub break_duration: f64,
    /// Minutes from midnight.
    pub optimal_start_time: f64,
    pub peak_performance_windows: Vec<PeakWindow>,
    /// Daily ceiling in minutes.
    pub max_daily_study_time: u32,
    /// Cognitive-load ceiling on new concepts per session.
    pub max_concepts: u32,
    /// Minutes between microbreaks.
    pub microbreak_interval: u32,
    /// Microbreak length in seconds.
    pub microbreak_duration: u32,
    pub break_activities: Vec<String>,
}

/// Spaced-repetition state for one subject. Created on the first completed
/// session, folded forward on every review.
///
/// Invariants: `ease_factor >= 1.3`, `interval >= 1.0` day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub subject: String,
    pub difficulty: DifficultyTier,
    /// Days until the item is due.
    pub interval: f64,
    pub ease_factor: f64,
    pub repetition_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_review: Option<NaiveDateTime>,
}

impl ReviewItem {
    /// Fresh item with the canonical SM-2 starting state.
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            difficulty: DifficultyTier::Medium,
            interval: 0.0,
            ease_factor: 2.5,
            repetition_count: 0,
            last_reviewed: None,
            next_review: None,
        }
    }
}

/// Candidate topic for one interleaving call. The scheduler consumes its own
/// working copy; callers pass fresh values per call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub name: String,
    /// 1-5 subjective difficulty.
    pub difficulty: f64,
    /// Minutes still needed on this topic.
    pub time_required: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_studied: Option<NaiveDateTime>,
    /// 0-1 mastery; absent means fully unmastered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mastery_level: Option<f64>,
}

/// One scheduled slice of an interleaved session; also the history record
/// the effectiveness analyzer consumes once performance is known.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterleavingSegment {
    pub topic_id: String,
    /// Minutes allocated to this slice.
    pub duration: f64,
    pub order: u32,
    pub rationale: String,
    /// Topic the learner switched away from, when this segment follows one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switched_from: Option<String>,
    /// Measured 0-1 performance, filled in by the caller after the fact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<f64>,
}

/// What actually happened in one study session, reported back by the caller
/// when the session ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionOutcome {
    /// Minutes the session was planned for.
    pub planned_duration: f64,
    /// Minutes actually studied.
    pub actual_duration: f64,
    /// 0-100.
    pub focus_score: f64,
    pub errors_count: u32,
    /// 1-10 self-report.
    pub self_reported_fatigue: f64,
    pub breaks_taken: u32,
}

impl Default for SessionOutcome {
    fn default() -> Self {
        Self {
            planned_duration: 0.0,
            actual_duration: 0.0,
            focus_score: 100.0,
            errors_count: 0,
            self_reported_fatigue: 1.0,
            breaks_taken: 0,
        }
    }
}
