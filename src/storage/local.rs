// src/storage/local.rs
use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use super::{NoteStore, LOCAL_KEY};
use crate::error::Result;
use crate::note::Note;

/// SQLite-backed key/value store holding a JSON-serialized note sequence
/// under a single key. Values are replaced wholesale, never patched.
pub struct SqliteStore {
    conn: Connection,
    key: String,
}

impl SqliteStore {
    /// Open or create the board database using the primary local key.
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with_key(path, LOCAL_KEY)
    }

    /// Open or create the board database under an arbitrary key.
    pub fn open_with_key(path: &Path, key: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS board_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self {
            conn,
            key: key.to_string(),
        })
    }

    fn get(&self) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM board_store WHERE key = ?1",
                [&self.key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put(&self, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO board_store (key, value) VALUES (?1, ?2)",
            params![self.key, value],
        )?;
        Ok(())
    }
}

impl NoteStore for SqliteStore {
    /// A missing key or malformed value loads as an empty board; neither
    /// surfaces to the caller.
    fn load(&self) -> Result<Vec<Note>> {
        let Some(raw) = self.get()? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(notes) => Ok(notes),
            Err(err) => {
                debug!(key = %self.key, %err, "discarding malformed stored board");
                Ok(Vec::new())
            }
        }
    }

    fn persist(&self, notes: &[Note]) -> Result<()> {
        self.put(&serde_json::to_string(notes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use uuid::Uuid;

    fn note(title: &str) -> Note {
        Note {
            id: Uuid::new_v4(),
            title: title.to_string(),
            x: 80.0,
            y: 80.0,
            width: 220.0,
            height: 180.0,
            color: "#fff2a8".to_string(),
            text: String::new(),
        }
    }

    #[test]
    fn test_missing_key_loads_empty() {
        let tmp = TempDir::new().unwrap();
        let store = SqliteStore::open(&tmp.path().join("board.db")).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_persist_and_reload() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("board.db");
        let notes = vec![note("one"), note("two")];

        let store = SqliteStore::open(&path).unwrap();
        store.persist(&notes).unwrap();
        drop(store);

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.load().unwrap(), notes);
    }

    #[test]
    fn test_persist_replaces_wholesale() {
        let tmp = TempDir::new().unwrap();
        let store = SqliteStore::open(&tmp.path().join("board.db")).unwrap();

        store.persist(&[note("one"), note("two")]).unwrap();
        let survivor = vec![note("three")];
        store.persist(&survivor).unwrap();

        assert_eq!(store.load().unwrap(), survivor);
    }

    #[test]
    fn test_malformed_value_loads_empty() {
        let tmp = TempDir::new().unwrap();
        let store = SqliteStore::open(&tmp.path().join("board.db")).unwrap();
        store.put("{not json").unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_keys_are_independent() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("board.db");
        let local = SqliteStore::open(&path).unwrap();
        let other = SqliteStore::open_with_key(&path, "sticky-notes-api").unwrap();

        local.persist(&[note("local only")]).unwrap();
        assert!(other.load().unwrap().is_empty());
    }
}
