//! Write-through reconciliation of task records across both remotes.

use crate::sync::{
    domain::{
        DueDate, Hours, PartialRecord, Priority, TaskDocument, TaskDomainError, TaskId,
        TaskListId, TaskRecord, UserKey,
    },
    ports::{DocumentStore, DocumentStoreError, TaskFields, TaskListError, TaskListService},
    services::SyncConfig,
};
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Service-level errors for reconciler operations.
#[derive(Debug, Clone, Error)]
pub enum SyncError {
    /// The session has not been initialised yet.
    #[error("session not initialised; call initialize first")]
    NotInitialized,

    /// The referenced task is absent from the local collection.
    #[error("no local record for task {0}")]
    NotFound(TaskId),

    /// A remote call exceeded the configured bound.
    #[error("remote call timed out: {operation}")]
    Timeout {
        /// Name of the remote operation that timed out.
        operation: &'static str,
    },

    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The task-list service failed.
    #[error(transparent)]
    TaskList(#[from] TaskListError),

    /// The document store failed.
    #[error(transparent)]
    Store(#[from] DocumentStoreError),
}

/// Result type for reconciler operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// One remote failure tolerated during the initial load.
#[derive(Debug, Clone)]
pub struct LoadFailure {
    /// The remote call that failed, qualified by list or task where useful.
    pub operation: String,
    /// The failure itself.
    pub error: SyncError,
}

/// Outcome of [`TaskReconciler::initialize`].
///
/// The load phase degrades to a partial collection rather than failing, so
/// callers inspect the report to distinguish "no tasks" from "fetch failed".
#[derive(Debug, Clone)]
#[must_use]
pub struct LoadReport {
    loaded: usize,
    failures: Vec<LoadFailure>,
}

impl LoadReport {
    /// Returns the number of records in the collection after the load.
    #[must_use]
    pub const fn loaded(&self) -> usize {
        self.loaded
    }

    /// Returns every remote failure tolerated during the load.
    #[must_use]
    pub fn failures(&self) -> &[LoadFailure] {
        &self.failures
    }

    /// Returns whether the load saw no remote failures.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTaskRequest {
    name: String,
    due: Option<DueDate>,
    priority: Priority,
    estimate: Option<Hours>,
}

impl CreateTaskRequest {
    /// Creates a request with required fields.
    #[must_use]
    pub fn new(name: impl Into<String>, priority: Priority) -> Self {
        Self {
            name: name.into(),
            due: None,
            priority,
            estimate: None,
        }
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_due(mut self, due: DueDate) -> Self {
        self.due = Some(due);
        self
    }

    /// Sets the effort estimate, enabling time tracking.
    #[must_use]
    pub const fn with_estimate(mut self, estimate: Hours) -> Self {
        self.estimate = Some(estimate);
        self
    }
}

/// Request payload for updating a task in place.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTaskRequest {
    id: TaskId,
    task_list_id: TaskListId,
    name: String,
    due: Option<DueDate>,
    priority: Priority,
    estimate: Option<Hours>,
    spent: Hours,
}

impl UpdateTaskRequest {
    /// Creates a request with required fields.
    #[must_use]
    pub fn new(
        id: TaskId,
        task_list_id: TaskListId,
        name: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            task_list_id,
            name: name.into(),
            due: None,
            priority,
            estimate: None,
            spent: Hours::ZERO,
        }
    }

    /// Sets the deadline.
    #[must_use]
    pub const fn with_due(mut self, due: DueDate) -> Self {
        self.due = Some(due);
        self
    }

    /// Sets the effort estimate, enabling time tracking.
    #[must_use]
    pub const fn with_estimate(mut self, estimate: Hours) -> Self {
        self.estimate = Some(estimate);
        self
    }

    /// Sets the spent-hours accumulator.
    #[must_use]
    pub const fn with_spent(mut self, spent: Hours) -> Self {
        self.spent = spent;
        self
    }
}

/// Session object owning the authoritative local collection of open tasks.
///
/// Fetches from the task-list service and the document store, merges their
/// fields into unified records, and writes every mutation through both
/// remotes before the local collection reflects the change. All mutating
/// operations take `&mut self`, which serialises them per session.
pub struct TaskReconciler<L, D>
where
    L: TaskListService,
    D: DocumentStore,
{
    task_list: Arc<L>,
    store: Arc<D>,
    user: UserKey,
    default_list: TaskListId,
    config: SyncConfig,
    records: Vec<TaskRecord>,
    initialized: bool,
}

impl<L, D> TaskReconciler<L, D>
where
    L: TaskListService,
    D: DocumentStore,
{
    /// Creates a session for one user over both remotes.
    #[must_use]
    pub fn new(task_list: Arc<L>, store: Arc<D>, user: UserKey) -> Self {
        Self {
            task_list,
            store,
            user,
            default_list: TaskListId::default_list(),
            config: SyncConfig::default(),
            records: Vec::new(),
            initialized: false,
        }
    }

    /// Overrides the session configuration.
    #[must_use]
    pub const fn with_config(mut self, config: SyncConfig) -> Self {
        self.config = config;
        self
    }

    /// Overrides the list new tasks are created on.
    #[must_use]
    pub fn with_default_list(mut self, list: TaskListId) -> Self {
        self.default_list = list;
        self
    }

    /// Returns the local collection, in discovery order.
    ///
    /// Empty until [`Self::initialize`] has run.
    #[must_use]
    pub fn records(&self) -> &[TaskRecord] {
        &self.records
    }

    /// Returns the local record for a task, when one exists.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&TaskRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Returns whether the initial load has run.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Loads every open task and enriches it from the document store.
    ///
    /// Remote failures during this phase are tolerated: the collection may
    /// come up partial, and every failure is logged and recorded in the
    /// returned report. Must not run twice concurrently for one session;
    /// `&mut self` enforces that within one reconciler value.
    pub async fn initialize(&mut self) -> LoadReport {
        let mut failures = Vec::new();
        let partials = self.load_open_tasks(&mut failures).await;
        let records = self.enrich_from_store(partials, &mut failures).await;
        let loaded = records.len();
        self.records = records;
        self.initialized = true;
        if failures.is_empty() {
            debug!(loaded, "initial load complete");
        } else {
            warn!(
                loaded,
                failed = failures.len(),
                "initial load degraded to a partial collection"
            );
        }
        LoadReport { loaded, failures }
    }

    /// Creates a task on the default list and writes it through both remotes.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Domain`] for invalid input and the remote error
    /// when either write fails; the local collection is untouched on any
    /// failure.
    pub async fn create_task(&mut self, request: CreateTaskRequest) -> SyncResult<TaskRecord> {
        self.ensure_initialized()?;
        if request.name.trim().is_empty() {
            return Err(TaskDomainError::EmptyTaskName.into());
        }
        let id = self
            .bounded(
                "create_task",
                self.task_list
                    .create_task(&self.default_list, &request.name, request.due),
            )
            .await?;
        self.bounded(
            "ensure_task_document",
            self.store
                .ensure_task_document(&self.user, &id, &request.name),
        )
        .await?;
        let fields = TaskFields {
            name: request.name.clone(),
            priority: request.priority,
            estimate: request.estimate,
            spent: Hours::ZERO,
            completed: false,
            due: request.due,
        };
        self.bounded(
            "set_task_fields",
            self.store.set_task_fields(&self.user, &id, &fields),
        )
        .await?;
        let record = TaskRecord::new(
            id,
            self.default_list.clone(),
            request.name,
            request.due,
            request.priority,
            request.estimate,
            Hours::ZERO,
        )?;
        debug!(task = %record.id(), "task created");
        self.records.push(record.clone());
        Ok(record)
    }

    /// Overwrites a task's mutable fields through both remotes.
    ///
    /// The local record is looked up by the caller-supplied id before any
    /// remote write, so an unknown id fails fast with [`SyncError::NotFound`]
    /// and leaves both remotes untouched. Ids are stable: the record and the
    /// document both stay keyed by the caller-supplied id.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::NotFound`] for an unknown id, [`SyncError::Domain`]
    /// for invalid input, and the remote error when either write fails.
    pub async fn update_task(&mut self, request: UpdateTaskRequest) -> SyncResult<TaskRecord> {
        self.ensure_initialized()?;
        let position = self.position(&request.id)?;
        if request.name.trim().is_empty() {
            return Err(TaskDomainError::EmptyTaskName.into());
        }
        self.bounded(
            "update_task",
            self.task_list.update_task(
                &request.id,
                &request.task_list_id,
                &request.name,
                request.due,
            ),
        )
        .await?;
        let fields = TaskFields {
            name: request.name.clone(),
            priority: request.priority,
            estimate: request.estimate,
            spent: request.spent,
            completed: false,
            due: request.due,
        };
        self.bounded(
            "set_task_fields",
            self.store.set_task_fields(&self.user, &request.id, &fields),
        )
        .await?;
        let record = TaskRecord::new(
            request.id,
            request.task_list_id,
            request.name,
            request.due,
            request.priority,
            request.estimate,
            request.spent,
        )?;
        if let Some(slot) = self.records.get_mut(position) {
            *slot = record.clone();
        }
        debug!(task = %record.id(), "task updated");
        Ok(record)
    }

    /// Marks a task complete on both remotes and drops it locally.
    ///
    /// The document store keeps the flagged document; only the local
    /// collection shrinks. Returns the removed record.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::NotFound`] for an unknown id and the remote
    /// error when either call fails; the local record stays in place until
    /// both remote calls have succeeded.
    pub async fn complete_task(&mut self, id: &TaskId) -> SyncResult<TaskRecord> {
        self.ensure_initialized()?;
        let position = self.position(id)?;
        let list = self
            .records
            .get(position)
            .map(|record| record.task_list_id().clone())
            .ok_or_else(|| SyncError::NotFound(id.clone()))?;
        self.bounded(
            "set_completed",
            self.store.set_completed(&self.user, id, true),
        )
        .await?;
        self.bounded("complete_task", self.task_list.complete_task(id, &list))
            .await?;
        debug!(task = %id, "task completed");
        Ok(self.records.remove(position))
    }

    /// Accumulates spent hours on a task, writing the new total through.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::NotFound`] for an unknown id,
    /// [`SyncError::Domain`] when the task carries no estimate, and the
    /// remote error when the write fails.
    pub async fn add_time_spent(&mut self, id: &TaskId, hours: Hours) -> SyncResult<TaskRecord> {
        self.ensure_initialized()?;
        let position = self.position(id)?;
        let tracking = self
            .records
            .get(position)
            .and_then(|record| record.time().copied())
            .ok_or_else(|| SyncError::Domain(TaskDomainError::TimeTrackingDisabled(id.clone())))?;
        let total = tracking.spent().saturating_add(hours);
        self.bounded(
            "set_time_spent",
            self.store.set_time_spent(&self.user, id, total),
        )
        .await?;
        let slot = self
            .records
            .get_mut(position)
            .ok_or_else(|| SyncError::NotFound(id.clone()))?;
        slot.add_time_spent(hours)?;
        Ok(slot.clone())
    }

    /// Resets a task's spent-hours accumulator, writing zero through.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::NotFound`] for an unknown id,
    /// [`SyncError::Domain`] when the task carries no estimate, and the
    /// remote error when the write fails.
    pub async fn reset_time_spent(&mut self, id: &TaskId) -> SyncResult<TaskRecord> {
        self.ensure_initialized()?;
        let position = self.position(id)?;
        if self
            .records
            .get(position)
            .is_none_or(|record| record.time().is_none())
        {
            return Err(SyncError::Domain(TaskDomainError::TimeTrackingDisabled(
                id.clone(),
            )));
        }
        self.bounded(
            "set_time_spent",
            self.store.set_time_spent(&self.user, id, Hours::ZERO),
        )
        .await?;
        let slot = self
            .records
            .get_mut(position)
            .ok_or_else(|| SyncError::NotFound(id.clone()))?;
        slot.reset_time_spent()?;
        Ok(slot.clone())
    }

    /// Enumerates lists and their open tasks into partial records.
    async fn load_open_tasks(&self, failures: &mut Vec<LoadFailure>) -> Vec<PartialRecord> {
        let lists = match self
            .bounded("list_task_lists", self.task_list.list_task_lists())
            .await
        {
            Ok(lists) => lists,
            Err(error) => {
                warn!(%error, "task-list enumeration failed; continuing with no lists");
                failures.push(LoadFailure {
                    operation: "list_task_lists".to_owned(),
                    error,
                });
                return Vec::new();
            }
        };
        let mut partials = Vec::new();
        for list in lists {
            match self
                .bounded("list_tasks", self.task_list.list_tasks(&list))
                .await
            {
                Ok(tasks) => partials.extend(
                    tasks
                        .into_iter()
                        .filter(|task| !task.status.is_completed())
                        .map(|task| PartialRecord {
                            id: task.id,
                            task_list_id: list.clone(),
                            name: task.title,
                            due_day: task.due_day,
                        }),
                ),
                Err(error) => {
                    warn!(list = %list, %error, "task enumeration failed; skipping list");
                    failures.push(LoadFailure {
                        operation: format!("list_tasks:{list}"),
                        error,
                    });
                }
            }
        }
        partials
    }

    /// Merges document-store fields onto every partial record.
    async fn enrich_from_store(
        &self,
        partials: Vec<PartialRecord>,
        failures: &mut Vec<LoadFailure>,
    ) -> Vec<TaskRecord> {
        let mut records = Vec::with_capacity(partials.len());
        for partial in partials {
            let document = match self.fetch_document(&partial.id, &partial.name).await {
                Ok(document) => document,
                Err(error) => {
                    warn!(task = %partial.id, %error, "document fetch failed; using default enrichment");
                    failures.push(LoadFailure {
                        operation: format!("get_task_document:{}", partial.id),
                        error,
                    });
                    TaskDocument::default()
                }
            };
            records.push(TaskRecord::from_enrichment(partial, &document));
        }
        records
    }

    /// Ensures a task's document exists, then reads it.
    async fn fetch_document(&self, id: &TaskId, name: &str) -> SyncResult<TaskDocument> {
        self.bounded(
            "ensure_task_document",
            self.store.ensure_task_document(&self.user, id, name),
        )
        .await?;
        self.bounded(
            "get_task_document",
            self.store.get_task_document(&self.user, id),
        )
        .await
    }

    /// Runs one remote call under the configured bound.
    async fn bounded<T, E>(
        &self,
        operation: &'static str,
        call: impl Future<Output = Result<T, E>>,
    ) -> SyncResult<T>
    where
        SyncError: From<E>,
    {
        match timeout(self.config.call_timeout(), call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => Err(SyncError::from(err)),
            Err(_) => Err(SyncError::Timeout { operation }),
        }
    }

    /// Finds the local position of a task.
    fn position(&self, id: &TaskId) -> SyncResult<usize> {
        self.records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| SyncError::NotFound(id.clone()))
    }

    /// Guards operations that require the initial load.
    const fn ensure_initialized(&self) -> SyncResult<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(SyncError::NotInitialized)
        }
    }
}
