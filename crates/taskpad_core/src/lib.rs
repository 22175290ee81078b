//! Core domain logic for taskpad.
//! This crate is the single source of truth for task list invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Priority, Task, TaskId};
pub use repo::slot_repo::{RepoError, RepoResult, SlotRepository, SqliteSlotRepository};
pub use service::task_store::TaskStore;
pub use view::presenter::{render, TaskItemView, TaskViewModel};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
