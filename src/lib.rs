//! Taskbridge: write-through task reconciliation.
//!
//! This crate merges heterogeneous task records from two remote services
//! into one authoritative in-process collection per user session, and
//! propagates local mutations back through both services before the local
//! collection changes.
//!
//! # Architecture
//!
//! Taskbridge follows hexagonal architecture principles:
//!
//! - **Domain**: Pure record and value types with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for the two remote collaborators
//! - **Adapters**: Concrete implementations of ports (in-memory today)
//!
//! # Modules
//!
//! - [`sync`]: Record merging, write-through mutations, and time tracking

pub mod sync;
