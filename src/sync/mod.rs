//! Task reconciliation across a task-list service and a document store.
//!
//! One session object merges the open tasks reported by the task-list
//! service with the enrichment fields the document store holds per task,
//! then writes every mutation through both remotes before the local
//! collection reflects the change. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
