//! Pure translation between the [`Task`] domain object and its storage
//! record.
//!
//! The mapper is the sole gatekeeper of the status enum/string impedance
//! boundary: records always carry a valid status token on the way in, and
//! unknown stored strings fail closed to the default member on the way out.
//! The mapper performs no I/O and no required-field validation; it assumes
//! shape-correct input.

use super::domain::{Task, TaskStatus};
use super::ports::TaskRecord;

/// Maps a domain task to its storage record.
///
/// An unset status is substituted with the default member so the stored
/// string is always a valid enumeration token.
#[must_use]
pub fn to_record(task: &Task) -> TaskRecord {
    TaskRecord {
        id: task.id(),
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        status: task.status_or_default().as_str().to_owned(),
        deadline: task.deadline(),
    }
}

/// Maps a storage record back to a domain task.
///
/// A stored status string that fails to parse against the enumeration is
/// substituted with the default member rather than becoming unset. This
/// leniency covers corrupted storage only; client input is validated before
/// it ever reaches the mapper.
#[must_use]
pub fn to_task(record: &TaskRecord) -> Task {
    let status = TaskStatus::try_from(record.status.as_str()).unwrap_or_default();
    let task = Task::new(
        record.title.clone(),
        record.description.clone(),
        Some(status),
        record.deadline,
    );
    match record.id {
        Some(id) => task.with_id(id),
        None => task,
    }
}
