// src/storage/remote.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::debug;

use super::{NoteStore, RemoteStore, SqliteStore, REMOTE_KEY};
use crate::error::Result;
use crate::note::Note;

/// Fixed artificial latency applied to every mock remote operation.
pub const API_LATENCY: Duration = Duration::from_millis(450);

/// Stand-in for a remote notes service. Backed by the same database file
/// as the local store but under its own key, so the two sinks never see
/// each other's writes. Each operation sleeps for the fixed latency and
/// opens a fresh connection, as a real client would per request.
pub struct MockRemote {
    path: PathBuf,
}

impl MockRemote {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn store(&self) -> Result<SqliteStore> {
        SqliteStore::open_with_key(&self.path, REMOTE_KEY)
    }
}

#[async_trait]
impl RemoteStore for MockRemote {
    async fn fetch(&self) -> Result<Vec<Note>> {
        sleep(API_LATENCY).await;
        let notes = self.store()?.load()?;
        debug!(count = notes.len(), "remote fetch resolved");
        Ok(notes)
    }

    async fn save(&self, notes: &[Note]) -> Result<()> {
        sleep(API_LATENCY).await;
        self.store()?.persist(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::time::Instant;
    use uuid::Uuid;

    fn note(title: &str) -> Note {
        Note {
            id: Uuid::new_v4(),
            title: title.to_string(),
            x: 0.0,
            y: 0.0,
            width: 220.0,
            height: 180.0,
            color: "#ffd1dc".to_string(),
            text: String::new(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_empty_and_save_round_trip() {
        let tmp = TempDir::new().unwrap();
        let remote = MockRemote::new(&tmp.path().join("board.db"));

        assert!(remote.fetch().await.unwrap().is_empty());

        let notes = vec![note("remote")];
        remote.save(&notes).await.unwrap();
        assert_eq!(remote.fetch().await.unwrap(), notes);
    }

    #[tokio::test(start_paused = true)]
    async fn test_operations_take_simulated_latency() {
        let tmp = TempDir::new().unwrap();
        let remote = MockRemote::new(&tmp.path().join("board.db"));

        let started = Instant::now();
        remote.fetch().await.unwrap();
        assert!(started.elapsed() >= API_LATENCY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_remote_key_does_not_see_local_writes() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("board.db");

        let local = SqliteStore::open(&path).unwrap();
        local.persist(&[note("local")]).unwrap();

        let remote = MockRemote::new(&path);
        assert!(remote.fetch().await.unwrap().is_empty());
    }
}
