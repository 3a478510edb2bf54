//! Domain model for task management.
//!
//! The task domain models the managed resource itself: identity, required
//! text fields, the status enumeration, and the offset-carrying deadline.
//! All infrastructure concerns stay outside of the domain boundary.

mod error;
mod task;

pub use error::{ParseTaskStatusError, ValidationErrors};
pub use task::{Task, TaskId, TaskStatus};
