//! Task record aggregate and the partial form it is merged from.

use super::{DueDate, Hours, TaskDocument, TaskDomainError, TaskId, TaskListId, TimeTracking};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Task priority, sourced from the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Low priority. Default for freshly created documents.
    #[default]
    Low,
    /// Medium priority.
    Medium,
    /// High priority.
    High,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(TaskDomainError::UnknownPriority(value.to_owned())),
        }
    }
}

/// Open task as known to the task-list service alone.
///
/// Produced by the load phase and consumed by enrichment; never exposed to
/// callers of the reconciler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialRecord {
    /// Task identifier assigned by the task-list service.
    pub id: TaskId,
    /// List the task was discovered on.
    pub task_list_id: TaskListId,
    /// Display name.
    pub name: String,
    /// Date-only deadline, when the service reported one.
    pub due_day: Option<NaiveDate>,
}

/// Unified, locally cached representation of one open task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    id: TaskId,
    task_list_id: TaskListId,
    name: String,
    due: Option<DueDate>,
    priority: Priority,
    time: Option<TimeTracking>,
}

impl TaskRecord {
    /// Creates a record from validated parts.
    ///
    /// `spent` is discarded when no estimate is given: a task without an
    /// estimate carries no time tracking at all.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskName`] when the name is empty
    /// after trimming.
    pub fn new(
        id: TaskId,
        task_list_id: TaskListId,
        name: impl Into<String>,
        due: Option<DueDate>,
        priority: Priority,
        estimate: Option<Hours>,
        spent: Hours,
    ) -> Result<Self, TaskDomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TaskDomainError::EmptyTaskName);
        }
        Ok(Self {
            id,
            task_list_id,
            name,
            due,
            priority,
            time: estimate.map(|estimate| TimeTracking::new(estimate, spent)),
        })
    }

    /// Merges document-store fields onto a partial record.
    ///
    /// A stored time-of-day is spliced onto the date-only deadline; absent
    /// time leaves the date-only value unchanged.
    #[must_use]
    pub fn from_enrichment(partial: PartialRecord, document: &TaskDocument) -> Self {
        let due = partial.due_day.map(|day| {
            let date_only = DueDate::Day(day);
            document
                .due_time
                .map_or(date_only, |time| date_only.merge_time(time))
        });
        Self {
            id: partial.id,
            task_list_id: partial.task_list_id,
            name: partial.name,
            due,
            priority: document.priority,
            time: document
                .estimate
                .map(|estimate| TimeTracking::new(estimate, document.spent)),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the owning list.
    #[must_use]
    pub const fn task_list_id(&self) -> &TaskListId {
        &self.task_list_id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the deadline, when one is set.
    #[must_use]
    pub const fn due(&self) -> Option<&DueDate> {
        self.due.as_ref()
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns time tracking, present only when the task has an estimate.
    #[must_use]
    pub const fn time(&self) -> Option<&TimeTracking> {
        self.time.as_ref()
    }

    /// Accumulates spent hours.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TimeTrackingDisabled`] when the task has
    /// no estimate.
    pub fn add_time_spent(&mut self, hours: Hours) -> Result<TimeTracking, TaskDomainError> {
        let tracking = self
            .time
            .as_mut()
            .ok_or_else(|| TaskDomainError::TimeTrackingDisabled(self.id.clone()))?;
        tracking.add_spent(hours);
        Ok(*tracking)
    }

    /// Resets the spent accumulator to zero.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TimeTrackingDisabled`] when the task has
    /// no estimate.
    pub fn reset_time_spent(&mut self) -> Result<TimeTracking, TaskDomainError> {
        let tracking = self
            .time
            .as_mut()
            .ok_or_else(|| TaskDomainError::TimeTrackingDisabled(self.id.clone()))?;
        tracking.reset_spent();
        Ok(*tracking)
    }
}
