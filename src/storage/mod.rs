// src/storage/mod.rs
//! The two persistence sinks behind the board: a synchronous local store
//! and an asynchronous mock remote, each holding the full note sequence
//! under its own key.

mod local;
mod remote;

pub use local::SqliteStore;
pub use remote::{MockRemote, API_LATENCY};

use async_trait::async_trait;

use crate::error::Result;
use crate::note::Note;

/// Key holding the primary local copy of the board.
pub const LOCAL_KEY: &str = "sticky-notes";

/// Key backing the mock remote, distinct so the two sinks never collide.
pub const REMOTE_KEY: &str = "sticky-notes-api";

/// The synchronous local sink: read wholesale at startup, written
/// wholesale after every change. Implementations swap in without touching
/// the controller.
pub trait NoteStore: Send {
    fn load(&self) -> Result<Vec<Note>>;
    fn persist(&self, notes: &[Note]) -> Result<()>;
}

/// The asynchronous remote sink. Callers treat latency and failure the
/// same way: state in memory stays authoritative.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Note>>;
    async fn save(&self, notes: &[Note]) -> Result<()>;
}
