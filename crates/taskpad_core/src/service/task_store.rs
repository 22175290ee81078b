//! Task store use-case service.
//!
//! # Responsibility
//! - Own the authoritative in-memory task collection.
//! - Expose the mutation surface the rendering layer holds: create,
//!   toggle, delete, clear-completed.
//! - Persist through a `SlotRepository` after every successful mutation.
//!
//! # Invariants
//! - Stored order is newest-first: creation prepends.
//! - Blank text and unknown ids are no-op results, not errors.
//! - Load failures degrade to an empty collection; save failures propagate
//!   and may leave in-memory state ahead of durable state.

use crate::model::task::{Priority, Task, TaskId};
use crate::repo::slot_repo::{RepoResult, SlotRepository};
use chrono::Utc;
use log::{info, warn};

/// The Store: sole owner and mutator of the task collection.
pub struct TaskStore<R: SlotRepository> {
    repo: R,
    tasks: Vec<Task>,
}

impl<R: SlotRepository> TaskStore<R> {
    /// Opens the store, loading persisted tasks through the repository.
    ///
    /// Missing, corrupt, or unreadable persisted data yields an empty
    /// collection; opening never fails.
    pub fn open(repo: R) -> Self {
        let tasks = match repo.load_tasks() {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!(
                    "event=store_open module=service status=degraded \
                     error_code=load_failed error={err}"
                );
                Vec::new()
            }
        };

        Self { repo, tasks }
    }

    /// Read view of the collection in stored (newest-first) order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Creates a task from raw user input.
    ///
    /// # Contract
    /// - Text is trimmed; a blank result is a silent no-op (`Ok(None)`).
    /// - The raw priority is normalized; unrecognized input becomes
    ///   `medium`.
    /// - The new task is prepended and persisted, then returned.
    pub fn create(&mut self, text: &str, raw_priority: Option<&str>) -> RepoResult<Option<&Task>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let priority = Priority::normalize(raw_priority);
        let task = Task::new(self.fresh_id(), trimmed, priority);
        let id = task.id;

        self.tasks.insert(0, task);
        self.repo.save_tasks(&self.tasks)?;
        info!(
            "event=task_create module=service status=ok id={id} priority={}",
            priority.as_str()
        );
        Ok(self.tasks.first())
    }

    /// Flips the completion flag of the matching task.
    ///
    /// Returns `Ok(false)` without touching storage when the id is unknown.
    pub fn toggle(&mut self, id: TaskId) -> RepoResult<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };

        task.completed = !task.completed;
        let completed = task.completed;
        self.repo.save_tasks(&self.tasks)?;
        info!("event=task_toggle module=service status=ok id={id} completed={completed}");
        Ok(true)
    }

    /// Removes the matching task. Unknown ids are a no-op (`Ok(false)`).
    pub fn delete(&mut self, id: TaskId) -> RepoResult<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }

        self.repo.save_tasks(&self.tasks)?;
        info!("event=task_delete module=service status=ok id={id}");
        Ok(true)
    }

    /// Removes every completed task and returns the number removed.
    ///
    /// Removing nothing skips the storage write and returns `Ok(0)`.
    pub fn clear_completed(&mut self) -> RepoResult<usize> {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        let removed = before - self.tasks.len();
        if removed == 0 {
            return Ok(0);
        }

        self.repo.save_tasks(&self.tasks)?;
        info!("event=tasks_clear_completed module=service status=ok removed={removed}");
        Ok(removed)
    }

    // Epoch-ms id, bumped past collisions so rapid successive creates in
    // the same millisecond still get unique ids.
    fn fresh_id(&self) -> TaskId {
        let mut id = Utc::now().timestamp_millis();
        while self.tasks.iter().any(|task| task.id == id) {
            id += 1;
        }
        id
    }
}
