//! In-memory adapters for both remote collaborators.

mod document_store;
mod task_list;

pub use document_store::InMemoryDocumentStore;
pub use task_list::InMemoryTaskListService;
