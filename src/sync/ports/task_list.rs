//! Port for the remote task-list service.
//!
//! Stands in for the vendor task API that is authoritative for task
//! existence and completion status. Adapters hold their own session
//! credentials; the port stays credential-free.

use crate::sync::domain::{DueDate, TaskId, TaskListId};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task-list service operations.
pub type TaskListResult<T> = Result<T, TaskListError>;

/// Completion status reported by the task-list service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteTaskStatus {
    /// The task is open.
    NeedsAction,
    /// The task has been completed and must not enter the local collection.
    Completed,
}

impl RemoteTaskStatus {
    /// Returns whether the task is completed.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Task as reported by the task-list service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTask {
    /// Service-assigned task identifier.
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Completion status.
    pub status: RemoteTaskStatus,
    /// Date-only deadline, when one is set.
    pub due_day: Option<NaiveDate>,
}

/// Task-list service contract.
#[async_trait]
pub trait TaskListService: Send + Sync {
    /// Enumerates every task list owned by the session user.
    async fn list_task_lists(&self) -> TaskListResult<Vec<TaskListId>>;

    /// Enumerates the tasks on one list, completed tasks included.
    async fn list_tasks(&self, list: &TaskListId) -> TaskListResult<Vec<RemoteTask>>;

    /// Creates a task on the given list.
    ///
    /// Returns the identifier the service assigned.
    async fn create_task(
        &self,
        list: &TaskListId,
        name: &str,
        due: Option<DueDate>,
    ) -> TaskListResult<TaskId>;

    /// Pushes a new name and deadline for an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::UnknownTask`] when the task does not exist
    /// on the given list.
    async fn update_task(
        &self,
        id: &TaskId,
        list: &TaskListId,
        name: &str,
        due: Option<DueDate>,
    ) -> TaskListResult<()>;

    /// Marks a task completed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::UnknownTask`] when the task does not exist
    /// on the given list.
    async fn complete_task(&self, id: &TaskId, list: &TaskListId) -> TaskListResult<()>;
}

/// Errors returned by task-list service implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskListError {
    /// The service could not be reached or rejected the call.
    #[error("task-list service unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// The referenced task does not exist on the given list.
    #[error("task-list service knows no task {0}")]
    UnknownTask(TaskId),
}

impl TaskListError {
    /// Wraps a transport-level failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
