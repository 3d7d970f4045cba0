use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier for a task. Positive, assigned by the store in strictly
/// increasing order, and never reused once issued.
pub type TaskId = u64;

/// Maximum title length in Unicode code points.
pub const TITLE_MAX_CHARS: usize = 200;
/// Maximum description length in Unicode code points.
pub const DESCRIPTION_MAX_CHARS: usize = 1000;
/// Maximum length of a single tag in Unicode code points.
pub const TAG_MAX_CHARS: usize = 20;
/// Maximum number of tasks a store will hold at once.
pub const MAX_TASKS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl Priority {
    /// Sort rank: High sorts before Medium sorts before Low.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecurrencePattern {
    Daily,
    Weekly,
    Monthly,
}

impl std::fmt::Display for RecurrencePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecurrencePattern::Daily => write!(f, "Daily"),
            RecurrencePattern::Weekly => write!(f, "Weekly"),
            RecurrencePattern::Monthly => write!(f, "Monthly"),
        }
    }
}

/// A task's recurrence rule: repeat every `interval` days/weeks/months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurrence {
    pub pattern: RecurrencePattern,
    /// Number of pattern units between occurrences, at least 1.
    pub interval: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    /// Lowercased, de-duplicated, in first-added order.
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub recurrence: Option<Recurrence>,
    /// Scheduled date of a task spawned by the recurrence engine.
    #[serde(default)]
    pub next_occurrence: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(id: TaskId, title: String, description: String) -> Self {
        Self {
            id,
            title,
            description,
            completed: false,
            priority: Priority::default(),
            tags: Vec::new(),
            created_at: Utc::now(),
            recurrence: None,
            next_occurrence: None,
        }
    }
}
