//! Task domain model.
//!
//! # Responsibility
//! - Define the sole entity of the system and its wire-exact serde shape.
//! - Provide priority normalization shared by creation and presentation.
//!
//! # Invariants
//! - `id` is unique among all tasks held by one store.
//! - `created_at` is set once at creation and never mutated.
//! - A record without `priority` stays without it across save/load; it is
//!   only *interpreted* as medium at rank/display time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Stable identifier for a task.
///
/// Derived from the creation epoch-millisecond timestamp; uniqueness within
/// one store is the hard contract, strict monotonicity is not.
pub type TaskId = i64;

/// Closed priority enumeration, serialized lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Parses a known wire value. Returns `None` for anything else.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    /// Normalizes raw user input, falling back to `Medium` for
    /// absent or unrecognized values.
    pub fn normalize(raw: Option<&str>) -> Self {
        raw.and_then(Self::parse).unwrap_or(Self::Medium)
    }

    /// Sort rank used by the presenter: `high(3) > medium(2) > low(1)`.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    /// Lowercase wire/display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// A single to-do entry.
///
/// The serde shape is the persistence contract: `createdAt` camelCase,
/// lowercase priority strings, and the `priority` field omitted entirely
/// when absent so legacy records survive round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    /// Absent on records created before priority existed. Unrecognized
    /// persisted values degrade to absent instead of failing the load.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_priority"
    )]
    pub priority: Option<Priority>,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new incomplete task stamped with the current time.
    ///
    /// # Invariants
    /// - `completed` starts as `false`.
    /// - The caller is responsible for `id` uniqueness within its store.
    pub fn new(id: TaskId, text: impl Into<String>, priority: Priority) -> Self {
        Self {
            id,
            text: text.into(),
            priority: Some(priority),
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// Priority as interpreted for ranking and display; absent reads as
    /// `Medium` without mutating the record.
    pub fn effective_priority(&self) -> Priority {
        self.priority.unwrap_or(Priority::Medium)
    }

    /// Numeric sort rank of the effective priority.
    pub fn priority_rank(&self) -> u8 {
        self.effective_priority().rank()
    }
}

fn lenient_priority<'de, D>(deserializer: D) -> Result<Option<Priority>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Priority::parse))
}
