//! Wire representations and structural validation for the task resource.
//!
//! Inbound bodies deserialize every field as optional so validation can
//! report every violated field at once, mirroring the per-field error map
//! contract. Outbound bodies serialize the full task shape with the status
//! as its uppercase token and the deadline as an RFC 3339 string.

use crate::task::domain::{Task, TaskId, TaskStatus, ValidationErrors};
use crate::task::services::{CreateTaskRequest, UpdateTaskRequest};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Fixed message for a missing required field.
const MUST_NOT_BE_NULL: &str = "must not be null";
/// Fixed message for a present but blank required field.
const MUST_NOT_BE_BLANK: &str = "must not be blank";
/// Fixed message for an unrecognized status token.
const INVALID_STATUS: &str = "must be one of PENDING, IN_PROGRESS, DONE, CANCELLED";
/// Fixed message for an unparseable deadline.
const INVALID_DEADLINE: &str = "must be an RFC 3339 timestamp with offset";

/// Inbound body for `POST /tasks`.
///
/// Create requests never carry `id` or `status`; both are server-assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskCreateBody {
    /// Task title; required.
    pub title: Option<String>,
    /// Task description; required.
    pub description: Option<String>,
    /// Optional deadline as an RFC 3339 string.
    pub deadline: Option<String>,
}

/// Inbound body for `PUT /tasks/{id}`.
///
/// Updates replace the stored record wholesale: an omitted `status` means
/// the wire default (`PENDING`), an omitted `deadline` means the server
/// clock's now. Any `id` in the body is ignored; identity comes from the
/// path and is never reassigned.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskWriteBody {
    /// Ignored; identity is path-supplied.
    pub id: Option<i64>,
    /// Replacement title; required.
    pub title: Option<String>,
    /// Replacement description; required.
    pub description: Option<String>,
    /// Replacement status token; defaults to `PENDING` when omitted.
    pub status: Option<String>,
    /// Replacement deadline as an RFC 3339 string; defaults to now.
    pub deadline: Option<String>,
}

/// Outbound task representation.
#[derive(Debug, Clone, Serialize)]
pub struct TaskBody {
    /// Storage-assigned identity.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Status as its uppercase wire token.
    pub status: TaskStatus,
    /// Deadline with timezone offset.
    pub deadline: DateTime<FixedOffset>,
}

impl TaskBody {
    /// Builds the wire shape from a domain task.
    ///
    /// Returns `None` when the task carries no identity; only persisted
    /// tasks can be rendered.
    #[must_use]
    pub fn from_task(task: &Task) -> Option<Self> {
        let id = task.id()?;
        Some(Self {
            id: id.value(),
            title: task.title().to_owned(),
            description: task.description().to_owned(),
            status: task.status_or_default(),
            deadline: task.deadline(),
        })
    }
}

/// Outbound body for a successful create: the assigned id and the location
/// of the new resource.
#[derive(Debug, Clone, Serialize)]
pub struct TaskCreatedBody {
    /// Storage-assigned identity.
    pub id: i64,
    /// Absolute URL of the created resource.
    pub url: String,
}

/// Validates a create body into a service request.
///
/// # Errors
///
/// Returns [`ValidationErrors`] carrying an entry for every violated field.
pub fn validate_create(body: TaskCreateBody) -> Result<CreateTaskRequest, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let title = require_text(&mut errors, "title", body.title);
    let description = require_text(&mut errors, "description", body.description);
    let deadline = parse_deadline(&mut errors, body.deadline);

    match (title, description) {
        (Some(title_text), Some(description_text)) if errors.is_empty() => {
            let mut request = CreateTaskRequest::new(title_text, description_text);
            if let Some(parsed) = deadline {
                request = request.with_deadline(parsed);
            }
            Ok(request)
        }
        _ => Err(errors),
    }
}

/// Validates an update body into a service request, applying the wire-level
/// status default.
///
/// An unrecognized status token is a client error here, never silently
/// defaulted; the mapper's read-path leniency covers corrupted storage only.
///
/// # Errors
///
/// Returns [`ValidationErrors`] carrying an entry for every violated field.
pub fn validate_update(body: TaskWriteBody) -> Result<UpdateTaskRequest, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let title = require_text(&mut errors, "title", body.title);
    let description = require_text(&mut errors, "description", body.description);
    let status = parse_status(&mut errors, body.status);
    let deadline = parse_deadline(&mut errors, body.deadline);

    match (title, description) {
        (Some(title_text), Some(description_text)) if errors.is_empty() => {
            let mut request = UpdateTaskRequest::new(title_text, description_text)
                .with_status(status.unwrap_or_default());
            if let Some(parsed) = deadline {
                request = request.with_deadline(parsed);
            }
            Ok(request)
        }
        _ => Err(errors),
    }
}

/// Builds the resource location path for a task id.
#[must_use]
pub fn resource_path(id: TaskId) -> String {
    format!("/tasks/{id}")
}

fn require_text(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
) -> Option<String> {
    match value {
        None => {
            errors.add(field, MUST_NOT_BE_NULL);
            None
        }
        Some(text) if text.trim().is_empty() => {
            errors.add(field, MUST_NOT_BE_BLANK);
            None
        }
        Some(text) => Some(text),
    }
}

fn parse_status(errors: &mut ValidationErrors, value: Option<String>) -> Option<TaskStatus> {
    let raw = value?;
    match TaskStatus::try_from(raw.as_str()) {
        Ok(status) => Some(status),
        Err(_) => {
            errors.add("status", INVALID_STATUS);
            None
        }
    }
}

fn parse_deadline(
    errors: &mut ValidationErrors,
    value: Option<String>,
) -> Option<DateTime<FixedOffset>> {
    let raw = value?;
    match DateTime::parse_from_rfc3339(&raw) {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.add("deadline", INVALID_DEADLINE);
            None
        }
    }
}
