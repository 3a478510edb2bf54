//! Service layer orchestrating task creation, retrieval, update, and
//! removal.

use crate::task::{
    domain::{Task, TaskId, TaskStatus, ValidationErrors},
    mapper,
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, FixedOffset};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
///
/// The status is never part of a create request; the service assigns
/// [`TaskStatus::Pending`]. The deadline is optional and defaults to the
/// service clock's current time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    deadline: Option<DateTime<FixedOffset>>,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            deadline: None,
        }
    }

    /// Sets an explicit deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<FixedOffset>) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Request payload for replacing a stored task wholesale.
///
/// An update is a full replace, never a merge: every field of the stored
/// record is overwritten. Callers that omitted `status` or `deadline` on the
/// wire pass the wire-level defaults here (the default status member and an
/// unset deadline respectively); nothing is preserved from the prior record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    title: String,
    description: String,
    status: TaskStatus,
    deadline: Option<DateTime<FixedOffset>>,
}

impl UpdateTaskRequest {
    /// Creates a request with the required fields and the default status.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: TaskStatus::default(),
            deadline: None,
        }
    }

    /// Sets the replacement status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets an explicit deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<FixedOffset>) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// One or more required fields are missing or malformed.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// No task exists with the requested identity.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Business-rule core for the task resource.
///
/// Owns default status assignment, the clock-sourced deadline default,
/// not-found detection, and full-replace update semantics, orchestrating the
/// mapper and the repository port. Generic over the repository and the clock
/// so tests can inject deterministic implementations.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and persists a task with the default status, returning the
    /// stored representation including its assigned identity.
    ///
    /// Required-field validation belongs to the transport boundary; the
    /// service re-asserts it here so a misbehaving caller cannot persist a
    /// blank task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] when `title` or
    /// `description` is blank, or [`TaskServiceError::Repository`] when
    /// persistence fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        require_text_fields(&request.title, &request.description)?;

        let deadline = self.resolve_deadline(request.deadline);
        let task = Task::new(
            request.title,
            request.description,
            Some(TaskStatus::Pending),
            deadline,
        );
        let stored = self.repository.save(mapper::to_record(&task)).await?;
        Ok(mapper::to_task(&stored))
    }

    /// Retrieves a task by identity.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task exists with the
    /// given id, or [`TaskServiceError::Repository`] when lookup fails.
    pub async fn get_by_id(&self, id: TaskId) -> TaskServiceResult<Task> {
        let record = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskServiceError::NotFound(id))?;
        Ok(mapper::to_task(&record))
    }

    /// Returns every stored task in insertion order, possibly empty.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when lookup fails.
    pub async fn get_all(&self) -> TaskServiceResult<Vec<Task>> {
        let records = self.repository.find_all().await?;
        Ok(records.iter().map(mapper::to_task).collect())
    }

    /// Replaces the stored task at `id` wholesale and returns the result.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task exists with the
    /// given id, or [`TaskServiceError::Repository`] when persistence fails.
    pub async fn update(&self, id: TaskId, request: UpdateTaskRequest) -> TaskServiceResult<Task> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(TaskServiceError::NotFound(id));
        }

        let deadline = self.resolve_deadline(request.deadline);
        let replacement = Task::new(
            request.title,
            request.description,
            Some(request.status),
            deadline,
        )
        .with_id(id);
        let stored = self.repository.save(mapper::to_record(&replacement)).await?;
        Ok(mapper::to_task(&stored))
    }

    /// Removes the stored task at `id`.
    ///
    /// Existence is checked first so a repeat delete of the same id fails
    /// with `NotFound`, consistent with the other operations.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::NotFound`] when no task exists with the
    /// given id, or [`TaskServiceError::Repository`] when removal fails.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(TaskServiceError::NotFound(id));
        }

        let _removed = self.repository.delete_by_id(id).await?;
        Ok(())
    }

    /// Applies the documented deadline default: the clock's current time,
    /// applied explicitly here rather than at type-definition time.
    fn resolve_deadline(&self, deadline: Option<DateTime<FixedOffset>>) -> DateTime<FixedOffset> {
        deadline.unwrap_or_else(|| self.clock.utc().fixed_offset())
    }
}

/// Asserts the required text fields are non-blank.
fn require_text_fields(title: &str, description: &str) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    if title.trim().is_empty() {
        errors.add("title", "must not be blank");
    }
    if description.trim().is_empty() {
        errors.add("description", "must not be blank");
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
