//! In-memory document store for reconciler tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::sync::{
    domain::{DueDate, Hours, TaskDocument, TaskId, UserKey},
    ports::{DocumentStore, DocumentStoreError, DocumentStoreResult, TaskFields},
};

/// Thread-safe in-memory document store holding per-user task documents.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    state: Arc<RwLock<StoreState>>,
}

#[derive(Debug, Default)]
struct StoreState {
    users: HashMap<UserKey, HashMap<TaskId, StoredDocument>>,
    offline: bool,
}

#[derive(Debug, Clone)]
struct StoredDocument {
    name: String,
    document: TaskDocument,
}

fn poisoned(err: impl std::fmt::Display) -> DocumentStoreError {
    DocumentStoreError::unavailable(std::io::Error::other(err.to_string()))
}

fn offline() -> DocumentStoreError {
    DocumentStoreError::unavailable(std::io::Error::other("document store offline"))
}

impl InMemoryDocumentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a document for a task, for test setup.
    pub fn seed_document(
        &self,
        user: &UserKey,
        id: &TaskId,
        name: impl Into<String>,
        document: TaskDocument,
    ) {
        if let Ok(mut state) = self.state.write() {
            state.users.entry(user.clone()).or_default().insert(
                id.clone(),
                StoredDocument {
                    name: name.into(),
                    document,
                },
            );
        }
    }

    /// Switches the store between reachable and unavailable.
    pub fn set_offline(&self, value: bool) {
        if let Ok(mut state) = self.state.write() {
            state.offline = value;
        }
    }

    /// Reads a task's document without the port contract, for assertions.
    #[must_use]
    pub fn document(&self, user: &UserKey, id: &TaskId) -> Option<TaskDocument> {
        let state = self.state.read().ok()?;
        state
            .users
            .get(user)
            .and_then(|documents| documents.get(id))
            .map(|stored| stored.document)
    }

    /// Reads the name stored with a task's document, for assertions.
    #[must_use]
    pub fn document_name(&self, user: &UserKey, id: &TaskId) -> Option<String> {
        let state = self.state.read().ok()?;
        state
            .users
            .get(user)
            .and_then(|documents| documents.get(id))
            .map(|stored| stored.name.clone())
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn ensure_task_document(
        &self,
        user: &UserKey,
        id: &TaskId,
        name: &str,
    ) -> DocumentStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.offline {
            return Err(offline());
        }
        state
            .users
            .entry(user.clone())
            .or_default()
            .entry(id.clone())
            .or_insert_with(|| StoredDocument {
                name: name.to_owned(),
                document: TaskDocument::default(),
            });
        Ok(())
    }

    async fn get_task_document(
        &self,
        user: &UserKey,
        id: &TaskId,
    ) -> DocumentStoreResult<TaskDocument> {
        let state = self.state.read().map_err(poisoned)?;
        if state.offline {
            return Err(offline());
        }
        state
            .users
            .get(user)
            .and_then(|documents| documents.get(id))
            .map(|stored| stored.document)
            .ok_or_else(|| DocumentStoreError::MissingDocument(id.clone()))
    }

    async fn set_task_fields(
        &self,
        user: &UserKey,
        id: &TaskId,
        fields: &TaskFields,
    ) -> DocumentStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.offline {
            return Err(offline());
        }
        let document = TaskDocument {
            priority: fields.priority,
            estimate: fields.estimate,
            spent: fields.spent,
            due_time: fields.due.as_ref().and_then(DueDate::time),
            completed: fields.completed,
        };
        state.users.entry(user.clone()).or_default().insert(
            id.clone(),
            StoredDocument {
                name: fields.name.clone(),
                document,
            },
        );
        Ok(())
    }

    async fn set_completed(
        &self,
        user: &UserKey,
        id: &TaskId,
        completed: bool,
    ) -> DocumentStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.offline {
            return Err(offline());
        }
        let stored = state
            .users
            .get_mut(user)
            .and_then(|documents| documents.get_mut(id))
            .ok_or_else(|| DocumentStoreError::MissingDocument(id.clone()))?;
        stored.document.completed = completed;
        Ok(())
    }

    async fn set_time_spent(
        &self,
        user: &UserKey,
        id: &TaskId,
        spent: Hours,
    ) -> DocumentStoreResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.offline {
            return Err(offline());
        }
        let stored = state
            .users
            .get_mut(user)
            .and_then(|documents| documents.get_mut(id))
            .ok_or_else(|| DocumentStoreError::MissingDocument(id.clone()))?;
        stored.document.spent = spent;
        Ok(())
    }
}
