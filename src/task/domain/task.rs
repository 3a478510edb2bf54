//! Task domain object, identity newtype, and status enumeration.

use super::ParseTaskStatusError;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a persisted task.
///
/// Identity is exclusively owned by the storage layer: assigned on create,
/// never client-supplied, never reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Wraps a storage-assigned identifier value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the underlying identifier value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task status progression.
///
/// The members are totally ordered for serialization stability only; no
/// transition semantics are implied and any member may replace any other
/// through an update.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Work has not started. The default for newly created tasks.
    #[default]
    Pending,
    /// Work is underway.
    InProgress,
    /// Work has been completed.
    Done,
    /// Work has been abandoned.
    Cancelled,
}

impl TaskStatus {
    /// Returns the canonical storage and wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "PENDING" => Ok(Self::Pending),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "DONE" => Ok(Self::Done),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The managed task resource as exchanged with clients and held in memory
/// during a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: Option<TaskId>,
    title: String,
    description: String,
    status: Option<TaskStatus>,
    deadline: DateTime<FixedOffset>,
}

impl Task {
    /// Creates a task without an identity.
    ///
    /// The status may be left unset; the mapping layer substitutes
    /// [`TaskStatus::Pending`] at the storage boundary.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: Option<TaskStatus>,
        deadline: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            status,
            deadline,
        }
    }

    /// Attaches a storage-assigned identity.
    #[must_use]
    pub const fn with_id(mut self, id: TaskId) -> Self {
        self.id = Some(id);
        self
    }

    /// Returns the task identity, if one has been assigned.
    #[must_use]
    pub const fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task status, if one has been set.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the task status, falling back to the default member.
    #[must_use]
    pub fn status_or_default(&self) -> TaskStatus {
        self.status.unwrap_or_default()
    }

    /// Returns the task deadline.
    #[must_use]
    pub const fn deadline(&self) -> DateTime<FixedOffset> {
        self.deadline
    }
}
