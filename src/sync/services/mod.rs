//! Orchestration services for task reconciliation.

mod config;
mod reconciler;

pub use config::SyncConfig;
pub use reconciler::{
    CreateTaskRequest, LoadFailure, LoadReport, SyncError, SyncResult, TaskReconciler,
    UpdateTaskRequest,
};
