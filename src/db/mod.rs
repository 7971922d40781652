//! Storage slot layer — the key-value API the directory persists through.
//!
//! `KeyValueStore` mirrors a browser storage slot: string keys, string
//! values, last write wins. `SqliteStore` persists slots in the
//! `local_storage` table; `MemoryStore` keeps them in a map for tests
//! and throwaway sessions.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Migration failed at version {version}: {reason}")]
    MigrationFailed { version: i64, reason: String },
}

/// String-keyed persistent slots.
pub trait KeyValueStore {
    /// Value stored under `key`, or `None` when the slot is empty.
    fn get_item(&self, key: &str) -> Result<Option<String>, DatabaseError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), DatabaseError>;

    /// Clear the slot. Clearing an empty slot is not an error.
    fn remove_item(&mut self, key: &str) -> Result<(), DatabaseError>;
}
