//! Enrichment fields held per task in the document store.

use super::{Hours, Priority};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Field set the document store keeps for one task.
///
/// The `Default` value is what `ensure_task_document` writes on first
/// sight of a task: lowest priority, no estimate, nothing spent, open.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskDocument {
    /// Task priority.
    pub priority: Priority,
    /// Estimated effort, when the user has supplied one.
    pub estimate: Option<Hours>,
    /// Hours spent so far.
    pub spent: Hours,
    /// Time-of-day portion of the deadline, when one is known.
    pub due_time: Option<NaiveTime>,
    /// Whether the task has been marked complete.
    pub completed: bool,
}
