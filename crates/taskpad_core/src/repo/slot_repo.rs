//! Single-slot task persistence, SQLite-backed.
//!
//! # Responsibility
//! - Serialize the full task collection to one JSON value stored under a
//!   fixed key, and read it back.
//! - Keep the round-trip lossless, including legacy records without a
//!   `priority` field.
//!
//! # Invariants
//! - A missing slot reads as an empty collection.
//! - An unparsable slot reads as an empty collection (logged, never an
//!   error); only SQLite transport failures surface from loads.
//! - Save errors propagate so callers know durability was not reached.

use crate::db::DbError;
use crate::model::task::Task;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key of the slot holding the serialized task collection.
const TASKS_SLOT_KEY: &str = "tasks";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for slot load/save operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize task collection: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Persistence contract for the task collection slot.
pub trait SlotRepository {
    fn load_tasks(&self) -> RepoResult<Vec<Task>>;
    fn save_tasks(&self, tasks: &[Task]) -> RepoResult<()>;
}

/// SQLite-backed slot repository.
pub struct SqliteSlotRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSlotRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SlotRepository for SqliteSlotRepository<'_> {
    fn load_tasks(&self) -> RepoResult<Vec<Task>> {
        let value: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1;",
                [TASKS_SLOT_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(raw) = value else {
            return Ok(Vec::new());
        };

        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => Ok(tasks),
            Err(err) => {
                warn!(
                    "event=slot_load module=repo status=degraded key={TASKS_SLOT_KEY} \
                     error_code=corrupt_slot error={err}"
                );
                Ok(Vec::new())
            }
        }
    }

    fn save_tasks(&self, tasks: &[Task]) -> RepoResult<()> {
        let raw = serde_json::to_string(tasks)?;

        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![TASKS_SLOT_KEY, raw],
        )?;

        Ok(())
    }
}
