//! Port for the per-user document store.
//!
//! Stands in for the vendor document database holding the enrichment
//! fields the task-list service does not track.

use crate::sync::domain::{DueDate, Hours, Priority, TaskDocument, TaskId, UserKey};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for document-store operations.
pub type DocumentStoreResult<T> = Result<T, DocumentStoreError>;

/// Full mutable field set written by update operations.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskFields {
    /// Display name.
    pub name: String,
    /// Task priority.
    pub priority: Priority,
    /// Estimated effort, when one is set.
    pub estimate: Option<Hours>,
    /// Hours spent so far.
    pub spent: Hours,
    /// Completion flag.
    pub completed: bool,
    /// Deadline, when one is set.
    pub due: Option<DueDate>,
}

/// Document-store contract, scoped per user.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Creates the task's document with default field values if absent.
    ///
    /// Idempotent: an existing document is left untouched.
    async fn ensure_task_document(
        &self,
        user: &UserKey,
        id: &TaskId,
        name: &str,
    ) -> DocumentStoreResult<()>;

    /// Reads the task's enrichment fields.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::MissingDocument`] when no document
    /// exists for the task.
    async fn get_task_document(&self, user: &UserKey, id: &TaskId)
    -> DocumentStoreResult<TaskDocument>;

    /// Writes the full mutable field set, creating the document if absent.
    async fn set_task_fields(
        &self,
        user: &UserKey,
        id: &TaskId,
        fields: &TaskFields,
    ) -> DocumentStoreResult<()>;

    /// Sets the completion flag.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::MissingDocument`] when no document
    /// exists for the task.
    async fn set_completed(
        &self,
        user: &UserKey,
        id: &TaskId,
        completed: bool,
    ) -> DocumentStoreResult<()>;

    /// Sets the spent-hours accumulator.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::MissingDocument`] when no document
    /// exists for the task.
    async fn set_time_spent(
        &self,
        user: &UserKey,
        id: &TaskId,
        spent: Hours,
    ) -> DocumentStoreResult<()>;
}

/// Errors returned by document-store implementations.
#[derive(Debug, Clone, Error)]
pub enum DocumentStoreError {
    /// The store could not be reached or rejected the call.
    #[error("document store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// No document exists for the referenced task.
    #[error("no document for task {0}")]
    MissingDocument(TaskId),
}

impl DocumentStoreError {
    /// Wraps a transport-level failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
