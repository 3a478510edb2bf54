//! Repository port for task persistence, lookup, and removal.

use crate::task::domain::TaskId;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use std::sync::Arc;
use thiserror::Error;

/// Storage-facing representation of a task.
///
/// Mirrors the domain task field for field, except that `status` is a plain
/// string and `id` remains unset until the store assigns it. Invariant: the
/// status string is always a valid [`crate::task::domain::TaskStatus`] token;
/// the mapping layer enforces this on every write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    /// Storage-assigned identity, absent before the first save.
    pub id: Option<TaskId>,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Status enumeration token in its canonical string form.
    pub status: String,
    /// Deadline with timezone offset.
    pub deadline: DateTime<FixedOffset>,
}

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract, polymorphic over any durable keyed store.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a record, assigning identity when `id` is unset and otherwise
    /// overwriting the existing entry at that id. Returns the stored value
    /// including its identity. Writes are all-or-nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::MissingEntry`] when `id` is set but no
    /// entry exists at that id, or [`TaskRepositoryError::Persistence`] on
    /// infrastructure failure.
    async fn save(&self, record: TaskRecord) -> TaskRepositoryResult<TaskRecord>;

    /// Finds a record by identity.
    ///
    /// Returns `None` when the record does not exist; absence is a normal
    /// outcome, not an error.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<TaskRecord>>;

    /// Returns all records in insertion order.
    ///
    /// The order is stable across repeated calls absent mutation.
    async fn find_all(&self) -> TaskRepositoryResult<Vec<TaskRecord>>;

    /// Removes the record at the given identity.
    ///
    /// Returns whether an entry was removed; the service layer decides
    /// whether "nothing to remove" is an error.
    async fn delete_by_id(&self, id: TaskId) -> TaskRepositoryResult<bool>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// A save addressed an id with no entry to overwrite.
    #[error("no stored task to overwrite at id {0}")]
    MissingEntry(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
