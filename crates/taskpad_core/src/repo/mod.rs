//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the single-slot persistence contract for the task collection.
//! - Isolate SQLite and JSON wire details from service orchestration.
//!
//! # Invariants
//! - Loads degrade missing or corrupt data to an empty collection.
//! - Saves replace the full slot contents in one statement.

pub mod slot_repo;
