//! Port contracts for the two remote collaborators.

mod document_store;
mod task_list;

pub use document_store::{DocumentStore, DocumentStoreError, DocumentStoreResult, TaskFields};
pub use task_list::{RemoteTask, RemoteTaskStatus, TaskListError, TaskListResult, TaskListService};
