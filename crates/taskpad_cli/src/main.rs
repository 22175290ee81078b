//! CLI rendering collaborator.
//!
//! # Responsibility
//! - Provide a minimal executable to exercise `taskpad_core` end to end:
//!   open the database, seed sample tasks on first run, print the view.
//! - Keep all markup/formatting concerns out of the core crate.

use std::path::Path;
use std::process::ExitCode;
use taskpad_core::db::open_db;
use taskpad_core::{
    default_log_level, init_logging, render, RepoError, SqliteSlotRepository, TaskStore,
    TaskViewModel,
};

const DEFAULT_DB_PATH: &str = "taskpad.db";

fn main() -> ExitCode {
    // File logging is best effort; the task list still works without it.
    match std::env::current_dir() {
        Ok(cwd) => {
            if let Err(err) = init_logging_under(&cwd) {
                eprintln!("taskpad: file logging disabled: {err}");
            }
        }
        Err(err) => eprintln!("taskpad: file logging disabled: {err}"),
    }

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

    let conn = match open_db(&path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("taskpad: failed to open `{path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut store = TaskStore::open(SqliteSlotRepository::new(&conn));
    if store.tasks().is_empty() {
        if let Err(err) = seed_sample_tasks(&mut store) {
            eprintln!("taskpad: failed to seed sample tasks: {err}");
            return ExitCode::FAILURE;
        }
    }

    println!("taskpad {}", taskpad_core::core_version());
    print_view(&render(store.tasks()));
    ExitCode::SUCCESS
}

/// Activates the core file-logging bootstrap under `<base>/logs`.
///
/// `base` must be absolute; repeat calls with the same base are idempotent.
fn init_logging_under(base: &Path) -> Result<(), String> {
    let log_dir = base.join("logs");
    let log_dir = log_dir
        .to_str()
        .ok_or_else(|| "log directory path is not valid UTF-8".to_string())?;
    init_logging(default_log_level(), log_dir)
}

/// First-run sample data, created through the ordinary store API so the
/// records carry the same shape as user-created tasks.
fn seed_sample_tasks(store: &mut TaskStore<SqliteSlotRepository<'_>>) -> Result<(), RepoError> {
    store.create("Learn the basics", Some("high"))?;
    store.create("Build a neat task list", Some("medium"))?;
    store.create("Practice a little every day", Some("medium"))?;
    store.create("Try a brand new task", Some("low"))?;
    store.create("Set a new objective", Some("low"))?;

    let done: Vec<_> = store
        .tasks()
        .iter()
        .filter(|task| task.text.contains("neat") || task.text.contains("objective"))
        .map(|task| task.id)
        .collect();
    for id in done {
        store.toggle(id)?;
    }
    Ok(())
}

fn print_view(view: &TaskViewModel) {
    if view.empty_state {
        println!("No tasks yet.");
        return;
    }

    for item in &view.incomplete {
        println!("[ ] {:<6} {}", item.priority.as_str(), item.text);
    }
    if let Some(count) = view.separator_count {
        println!("----- done ({count}) -----");
    }
    for item in &view.completed {
        println!("[x] {:<6} {}", item.priority.as_str(), item.text);
    }
    println!(
        "{} tasks ({} done, {} left)",
        view.total, view.completed_count, view.pending_count
    );
}
