//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task record used by core business logic.
//! - Keep the serde shape pinned to the persisted wire contract.
//!
//! # Invariants
//! - Every task is identified by a stable integer `TaskId`.
//! - Priority is a closed three-value enumeration; absence is legal and
//!   preserved on round-trips.

pub mod task;
