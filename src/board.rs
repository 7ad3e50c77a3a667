// src/board.rs
//! Board state and the pointer-driven drag controller.
//!
//! The board owns the ordered note sequence (later position renders on
//! top), the single active drag session, and the last-measured surface
//! and trash-zone rectangles. Mutating operations return `true` when the
//! note sequence changed, which is what callers persist on.

use uuid::Uuid;

use crate::draft::NoteDraft;
use crate::geometry::{clamp, Point, Rect, Size};
use crate::note::{Note, COLOR_POOL, MIN_SIZE, UNTITLED};

/// What a drag session is changing: the note's position or its dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Move,
    Resize,
}

/// Ephemeral record of an in-progress drag. Created on pointer-down over a
/// drag handle, read on every pointer-move, destroyed on pointer-up. At
/// most one exists at a time.
#[derive(Debug, Clone)]
struct DragSession {
    id: Uuid,
    mode: DragMode,
    start_x: f64,
    start_y: f64,
    origin_x: f64,
    origin_y: f64,
    origin_width: f64,
    origin_height: f64,
}

#[derive(Debug, Default)]
pub struct Board {
    notes: Vec<Note>,
    drag: Option<DragSession>,
    bounds: Option<Size>,
    trash: Option<Rect>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// The note sequence in z-order, bottom first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn note(&self, id: Uuid) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Replace the whole sequence, as the remote overwrite does.
    pub fn replace_notes(&mut self, notes: Vec<Note>) {
        self.notes = notes;
    }

    /// Record a measurement of the board surface. Clamping only applies
    /// when a measurement is available.
    pub fn set_bounds(&mut self, bounds: Size) {
        self.bounds = Some(bounds);
    }

    /// Record a measurement of the trash drop zone.
    pub fn set_trash_zone(&mut self, rect: Rect) {
        self.trash = Some(rect);
    }

    pub fn dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Drop any in-progress drag without releasing it.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Move the note to the end of the sequence so it renders on top.
    /// Returns false if the id is absent or the note is already last.
    pub fn bring_to_front(&mut self, id: Uuid) -> bool {
        let Some(index) = self.notes.iter().position(|note| note.id == id) else {
            return false;
        };
        if index == self.notes.len() - 1 {
            return false;
        }
        let note = self.notes.remove(index);
        self.notes.push(note);
        true
    }

    /// Start a move or resize drag on the given note.
    ///
    /// Raises the note first, then snapshots the pointer origin and the
    /// note's geometry as the session's reference frame. Ignored if the
    /// note does not exist or another drag is already active (the active
    /// session is the input-routing lock: move/up events belong to it
    /// until it releases). Returns true if the z-order changed.
    pub fn begin_drag(&mut self, pointer: Point, id: Uuid, mode: DragMode) -> bool {
        if self.drag.is_some() {
            return false;
        }
        let Some(note) = self.note(id) else {
            return false;
        };
        let session = DragSession {
            id,
            mode,
            start_x: pointer.x,
            start_y: pointer.y,
            origin_x: note.x,
            origin_y: note.y,
            origin_width: note.width,
            origin_height: note.height,
        };
        let raised = self.bring_to_front(id);
        self.drag = Some(session);
        raised
    }

    /// Apply a pointer movement to the dragged note.
    ///
    /// Deltas are measured against the session's pointer origin, and the
    /// candidate geometry against the note's origin, so intermediate moves
    /// never accumulate error. With no measured bounds the upper clamp is
    /// skipped; the lower clamp (0 for move, MIN_SIZE for resize) always
    /// holds. Upper bounds are floored at the lower bound so a note larger
    /// than the board pins in place instead of inverting the clamp.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let Some(drag) = self.drag.clone() else {
            return false;
        };
        let delta_x = pointer.x - drag.start_x;
        let delta_y = pointer.y - drag.start_y;
        let bounds = self.bounds;

        let Some(note) = self.notes.iter_mut().find(|note| note.id == drag.id) else {
            return false;
        };

        match drag.mode {
            DragMode::Move => {
                let x = drag.origin_x + delta_x;
                let y = drag.origin_y + delta_y;
                match bounds {
                    Some(b) => {
                        let max_x = (b.width - note.width).max(0.0);
                        let max_y = (b.height - note.height).max(0.0);
                        note.x = clamp(x, 0.0, max_x);
                        note.y = clamp(y, 0.0, max_y);
                    }
                    None => {
                        note.x = x.max(0.0);
                        note.y = y.max(0.0);
                    }
                }
            }
            DragMode::Resize => {
                let width = drag.origin_width + delta_x;
                let height = drag.origin_height + delta_y;
                match bounds {
                    Some(b) => {
                        let max_width = (b.width - note.x).max(MIN_SIZE);
                        let max_height = (b.height - note.y).max(MIN_SIZE);
                        note.width = clamp(width, MIN_SIZE, max_width);
                        note.height = clamp(height, MIN_SIZE, max_height);
                    }
                    None => {
                        note.width = width.max(MIN_SIZE);
                        note.height = height.max(MIN_SIZE);
                    }
                }
            }
        }
        true
    }

    /// End the active drag. The session is cleared unconditionally; a
    /// move-mode release inside the trash zone deletes the dragged note.
    /// Returns true if a note was removed.
    pub fn pointer_release(&mut self, pointer: Point) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        if drag.mode != DragMode::Move {
            return false;
        }
        let Some(trash) = self.trash else {
            return false;
        };
        if !trash.contains(pointer) {
            return false;
        }
        let before = self.notes.len();
        self.notes.retain(|note| note.id != drag.id);
        self.notes.len() != before
    }

    /// Commit the creation form as a new note at the top of the z-order.
    ///
    /// A blank title falls back to the placeholder; a blank color cycles
    /// through the palette by note count.
    pub fn add_note(&mut self, draft: &NoteDraft) -> Uuid {
        let title = if draft.title.trim().is_empty() {
            UNTITLED.to_string()
        } else {
            draft.title.clone()
        };
        let color = if draft.color.is_empty() {
            COLOR_POOL[self.notes.len() % COLOR_POOL.len()].to_string()
        } else {
            draft.color.clone()
        };
        let note = Note {
            id: Uuid::new_v4(),
            title,
            x: draft.x,
            y: draft.y,
            width: draft.width,
            height: draft.height,
            color,
            text: String::new(),
        };
        let id = note.id;
        self.notes.push(note);
        id
    }

    pub fn update_text(&mut self, id: Uuid, text: &str) -> bool {
        self.update(id, |note| note.text = text.to_string())
    }

    pub fn update_title(&mut self, id: Uuid, title: &str) -> bool {
        self.update(id, |note| note.title = title.to_string())
    }

    pub fn update_color(&mut self, id: Uuid, color: &str) -> bool {
        self.update(id, |note| note.color = color.to_string())
    }

    /// End-of-edit normalization: a blank title is reset to the
    /// placeholder. Applied once per edit session, not per keystroke.
    pub fn finish_title_edit(&mut self, id: Uuid) -> bool {
        let Some(note) = self.notes.iter().find(|note| note.id == id) else {
            return false;
        };
        if !note.title.trim().is_empty() {
            return false;
        }
        self.update(id, |note| note.title = UNTITLED.to_string())
    }

    fn update(&mut self, id: Uuid, apply: impl FnOnce(&mut Note)) -> bool {
        match self.notes.iter_mut().find(|note| note.id == id) {
            Some(note) => {
                apply(note);
                true
            }
            None => false,
        }
    }
}
