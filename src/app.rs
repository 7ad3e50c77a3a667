// src/app.rs
//! The document lifecycle: a mounted board wired to its two persistence
//! sinks.
//!
//! All mutation happens on discrete calls into [`BoardApp`]; the storage
//! futures suspend without blocking, so arbitrary edits may interleave
//! with the in-flight initial fetch. The mount flag guards exactly that
//! race: a fetch resolving after unmount is a no-op.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::oneshot;
use tokio::task::JoinSet;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::board::{Board, DragMode};
use crate::draft::NoteDraft;
use crate::geometry::{Point, Rect, Size};
use crate::note::Note;
use crate::storage::{NoteStore, RemoteStore};

pub struct BoardApp {
    board: Board,
    local: Box<dyn NoteStore>,
    remote: Arc<dyn RemoteStore>,
    mounted: Arc<AtomicBool>,
    fetch: Option<oneshot::Receiver<Vec<Note>>>,
    saves: JoinSet<()>,
}

impl BoardApp {
    pub fn new(local: Box<dyn NoteStore>, remote: Arc<dyn RemoteStore>) -> Self {
        Self {
            board: Board::new(),
            local,
            remote,
            mounted: Arc::new(AtomicBool::new(false)),
            fetch: None,
            saves: JoinSet::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn notes(&self) -> &[Note] {
        self.board.notes()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// Mount the board: hydrate synchronously from the local store, then
    /// kick off the one-shot remote fetch. Must run inside a tokio
    /// runtime. Failures loading locally leave the board empty.
    pub fn mount(&mut self) {
        if self.is_mounted() {
            return;
        }
        self.mounted.store(true, Ordering::SeqCst);

        match self.local.load() {
            Ok(notes) => self.board.replace_notes(notes),
            Err(err) => warn!(%err, "local load failed; starting empty"),
        }

        let (tx, rx) = oneshot::channel();
        self.fetch = Some(rx);
        let remote = Arc::clone(&self.remote);
        let mounted = Arc::clone(&self.mounted);
        tokio::spawn(async move {
            match remote.fetch().await {
                // Late results are dropped once the board is unmounted.
                Ok(notes) => {
                    if mounted.load(Ordering::SeqCst) {
                        let _ = tx.send(notes);
                    }
                }
                Err(err) => debug!(%err, "remote fetch failed; local state stays"),
            }
        });
    }

    /// Wait for the in-flight remote fetch and apply its result: a
    /// non-empty remote board replaces local state wholesale (never a
    /// merge); an empty or failed fetch leaves it untouched. Returns true
    /// if state changed.
    pub async fn remote_sync(&mut self) -> bool {
        let Some(rx) = self.fetch.take() else {
            return false;
        };
        let Ok(notes) = rx.await else {
            return false;
        };
        if notes.is_empty() || !self.is_mounted() {
            return false;
        }
        self.board.replace_notes(notes);
        self.persist();
        true
    }

    /// Tear down: drop the pending fetch, detach from further input by
    /// clearing any live drag session, and mark the app unmounted.
    /// In-flight remote saves are unaffected.
    pub fn unmount(&mut self) {
        self.mounted.store(false, Ordering::SeqCst);
        self.fetch = None;
        self.board.cancel_drag();
    }

    /// Wait for every fire-and-forget remote save spawned so far. The
    /// saves themselves swallow errors; this only bounds process exit.
    pub async fn flush(&mut self) {
        while self.saves.join_next().await.is_some() {}
    }

    pub fn set_bounds(&mut self, bounds: Size) {
        self.board.set_bounds(bounds);
    }

    pub fn set_trash_zone(&mut self, rect: Rect) {
        self.board.set_trash_zone(rect);
    }

    pub fn add_note(&mut self, draft: &NoteDraft) -> Uuid {
        let id = self.board.add_note(draft);
        self.persist();
        id
    }

    pub fn bring_to_front(&mut self, id: Uuid) {
        if self.board.bring_to_front(id) {
            self.persist();
        }
    }

    pub fn begin_drag(&mut self, pointer: Point, id: Uuid, mode: DragMode) {
        // Starting a drag raises the note, which reorders the sequence.
        if self.board.begin_drag(pointer, id, mode) {
            self.persist();
        }
    }

    pub fn pointer_move(&mut self, pointer: Point) {
        if self.board.pointer_move(pointer) {
            self.persist();
        }
    }

    pub fn pointer_release(&mut self, pointer: Point) -> bool {
        let removed = self.board.pointer_release(pointer);
        if removed {
            self.persist();
        }
        removed
    }

    pub fn update_text(&mut self, id: Uuid, text: &str) {
        if self.board.update_text(id, text) {
            self.persist();
        }
    }

    pub fn update_title(&mut self, id: Uuid, title: &str) {
        if self.board.update_title(id, title) {
            self.persist();
        }
    }

    pub fn update_color(&mut self, id: Uuid, color: &str) {
        if self.board.update_color(id, color) {
            self.persist();
        }
    }

    pub fn finish_title_edit(&mut self, id: Uuid) {
        if self.board.finish_title_edit(id) {
            self.persist();
        }
    }

    /// Push the full sequence to both sinks. The local write is
    /// synchronous; the remote save is spawned fire-and-forget. Both
    /// failure modes are swallowed.
    fn persist(&mut self) {
        if let Err(err) = self.local.persist(self.board.notes()) {
            warn!(%err, "local persist failed");
        }
        let remote = Arc::clone(&self.remote);
        let notes = self.board.notes().to_vec();
        self.saves.spawn(async move {
            if let Err(err) = remote.save(&notes).await {
                debug!(%err, "remote save failed");
            }
        });
    }
}
