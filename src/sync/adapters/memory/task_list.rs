//! In-memory task-list service for reconciler tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::sync::{
    domain::{DueDate, TaskId, TaskListId},
    ports::{RemoteTask, RemoteTaskStatus, TaskListError, TaskListResult, TaskListService},
};

/// Thread-safe in-memory task-list service.
///
/// Seeds a default list on construction and assigns fresh ids on creation,
/// the way the remote service would. An offline switch makes every call
/// fail with [`TaskListError::Unavailable`] for failure-path tests.
#[derive(Debug, Clone)]
pub struct InMemoryTaskListService {
    state: Arc<RwLock<ListState>>,
}

#[derive(Debug)]
struct ListState {
    lists: Vec<TaskListId>,
    tasks: HashMap<TaskListId, Vec<RemoteTask>>,
    offline: bool,
}

impl Default for InMemoryTaskListService {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned(err: impl std::fmt::Display) -> TaskListError {
    TaskListError::unavailable(std::io::Error::other(err.to_string()))
}

fn offline() -> TaskListError {
    TaskListError::unavailable(std::io::Error::other("task-list service offline"))
}

impl InMemoryTaskListService {
    /// Creates a service holding only the user's empty default list.
    #[must_use]
    pub fn new() -> Self {
        let default_list = TaskListId::default_list();
        Self {
            state: Arc::new(RwLock::new(ListState {
                lists: vec![default_list.clone()],
                tasks: HashMap::from([(default_list, Vec::new())]),
                offline: false,
            })),
        }
    }

    /// Adds an empty task list.
    pub fn add_list(&self, list: TaskListId) {
        if let Ok(mut state) = self.state.write() {
            state.tasks.entry(list.clone()).or_default();
            state.lists.push(list);
        }
    }

    /// Seeds a task onto a list, creating the list if absent.
    pub fn seed_task(&self, list: &TaskListId, task: RemoteTask) {
        if let Ok(mut state) = self.state.write() {
            if !state.lists.contains(list) {
                state.lists.push(list.clone());
            }
            state.tasks.entry(list.clone()).or_default().push(task);
        }
    }

    /// Switches the service between reachable and unavailable.
    pub fn set_offline(&self, value: bool) {
        if let Ok(mut state) = self.state.write() {
            state.offline = value;
        }
    }

    /// Looks a task up across every list, for test assertions.
    #[must_use]
    pub fn find_task(&self, id: &TaskId) -> Option<RemoteTask> {
        let state = self.state.read().ok()?;
        state
            .tasks
            .values()
            .flat_map(|tasks| tasks.iter())
            .find(|task| task.id == *id)
            .cloned()
    }
}

#[async_trait]
impl TaskListService for InMemoryTaskListService {
    async fn list_task_lists(&self) -> TaskListResult<Vec<TaskListId>> {
        let state = self.state.read().map_err(poisoned)?;
        if state.offline {
            return Err(offline());
        }
        Ok(state.lists.clone())
    }

    async fn list_tasks(&self, list: &TaskListId) -> TaskListResult<Vec<RemoteTask>> {
        let state = self.state.read().map_err(poisoned)?;
        if state.offline {
            return Err(offline());
        }
        Ok(state.tasks.get(list).cloned().unwrap_or_default())
    }

    async fn create_task(
        &self,
        list: &TaskListId,
        name: &str,
        due: Option<DueDate>,
    ) -> TaskListResult<TaskId> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.offline {
            return Err(offline());
        }
        if !state.lists.contains(list) {
            state.lists.push(list.clone());
        }
        let id = TaskId::mint();
        let task = RemoteTask {
            id: id.clone(),
            title: name.to_owned(),
            status: RemoteTaskStatus::NeedsAction,
            due_day: due.map(|due| due.day()),
        };
        state.tasks.entry(list.clone()).or_default().push(task);
        Ok(id)
    }

    async fn update_task(
        &self,
        id: &TaskId,
        list: &TaskListId,
        name: &str,
        due: Option<DueDate>,
    ) -> TaskListResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.offline {
            return Err(offline());
        }
        let task = state
            .tasks
            .get_mut(list)
            .and_then(|tasks| tasks.iter_mut().find(|task| task.id == *id))
            .ok_or_else(|| TaskListError::UnknownTask(id.clone()))?;
        task.title = name.to_owned();
        task.due_day = due.map(|due| due.day());
        Ok(())
    }

    async fn complete_task(&self, id: &TaskId, list: &TaskListId) -> TaskListResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.offline {
            return Err(offline());
        }
        let task = state
            .tasks
            .get_mut(list)
            .and_then(|tasks| tasks.iter_mut().find(|task| task.id == *id))
            .ok_or_else(|| TaskListError::UnknownTask(id.clone()))?;
        task.status = RemoteTaskStatus::Completed;
        Ok(())
    }
}
