//! Error types for sync domain validation and parsing.

use super::TaskId;
use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TaskDomainError {
    /// The task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,

    /// The task-list identifier is empty after trimming.
    #[error("task-list identifier must not be empty")]
    EmptyTaskListId,

    /// The user key is empty after trimming.
    #[error("user key must not be empty")]
    EmptyUserKey,

    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The hour value is negative or not a finite number.
    #[error("invalid hour value {0}, expected a finite non-negative number")]
    InvalidHours(f64),

    /// The priority value is unrecognised.
    #[error("unknown priority: {0}")]
    UnknownPriority(String),

    /// The task carries no estimate, so time tracking is disabled.
    #[error("task {0} has no time estimate; time tracking is disabled")]
    TimeTrackingDisabled(TaskId),
}
