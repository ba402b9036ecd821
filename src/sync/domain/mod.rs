//! Domain model for task reconciliation.
//!
//! The sync domain models the unified task record merged from the two
//! remote collaborators, its validated scalar values, and the partial form
//! produced between the load and enrichment phases, while keeping all
//! infrastructure concerns outside of the domain boundary.

mod document;
mod due;
mod error;
mod ids;
mod record;
mod time;

pub use document::TaskDocument;
pub use due::DueDate;
pub use error::TaskDomainError;
pub use ids::{TaskId, TaskListId, UserKey};
pub use record::{PartialRecord, Priority, TaskRecord};
pub use time::{Hours, TimeTracking};
