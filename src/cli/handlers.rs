use std::path::{Path, PathBuf};
use std::sync::Arc;

use uuid::Uuid;

use crate::app::BoardApp;
use crate::board::DragMode;
use crate::draft::NoteDraft;
use crate::error::{BoardError, Result};
use crate::geometry::{Point, Rect, Size};
use crate::note::Note;
use crate::storage::{MockRemote, SqliteStore};

// The terminal has no measurable surface, so every command runs against
// the same virtual viewport, with the trash zone in the bottom-right
// corner as the original layout places it.
const BOARD_WIDTH: f64 = 1600.0;
const BOARD_HEIGHT: f64 = 1000.0;
const TRASH_ZONE: Rect = Rect {
    x: 1420.0,
    y: 880.0,
    width: 160.0,
    height: 100.0,
};

/// Open, measure and mount the board, waiting out the initial remote
/// fetch so a non-empty remote copy wins before the command runs.
async fn open_board(path: &Path) -> Result<BoardApp> {
    let local = SqliteStore::open(path)?;
    let remote = MockRemote::new(path);
    let mut app = BoardApp::new(Box::new(local), Arc::new(remote));
    app.set_bounds(Size::new(BOARD_WIDTH, BOARD_HEIGHT));
    app.set_trash_zone(TRASH_ZONE);
    app.mount();
    app.remote_sync().await;
    Ok(app)
}

/// Let pending remote saves finish, then unmount.
async fn close_board(mut app: BoardApp) {
    app.flush().await;
    app.unmount();
}

/// Resolve a full UUID or unique prefix against the current board.
fn resolve_note(app: &BoardApp, id: &str) -> Result<Uuid> {
    let needle = id.to_lowercase();
    let matches: Vec<Uuid> = app
        .notes()
        .iter()
        .map(|note| note.id)
        .filter(|candidate| candidate.to_string().starts_with(&needle))
        .collect();
    match matches.as_slice() {
        [] => Err(BoardError::NoteNotFound(id.to_string())),
        [only] => Ok(*only),
        _ => Err(BoardError::AmbiguousNoteId(id.to_string())),
    }
}

fn note_snapshot(app: &BoardApp, id: Uuid) -> Result<Note> {
    app.board()
        .note(id)
        .cloned()
        .ok_or_else(|| BoardError::NoteNotFound(id.to_string()))
}

fn short(id: Uuid) -> String {
    id.to_string()[..7].to_string()
}

pub async fn handle_add(
    board: PathBuf,
    title: Option<String>,
    x: Option<String>,
    y: Option<String>,
    width: Option<String>,
    height: Option<String>,
    color: Option<String>,
    json: bool,
) -> Result<()> {
    let mut app = open_board(&board).await?;

    let mut draft = NoteDraft::default();
    draft.title = title.unwrap_or_default();
    // An omitted color leaves the draft blank so the palette cycle picks.
    draft.color = color.unwrap_or_default();
    if let Some(x) = &x {
        if !draft.set_x(x) {
            eprintln!("Warning: ignoring non-numeric --x '{}'", x);
        }
    }
    if let Some(y) = &y {
        if !draft.set_y(y) {
            eprintln!("Warning: ignoring non-numeric --y '{}'", y);
        }
    }
    if let Some(width) = &width {
        if !draft.set_width(width) {
            eprintln!("Warning: ignoring non-numeric --width '{}'", width);
        }
    }
    if let Some(height) = &height {
        if !draft.set_height(height) {
            eprintln!("Warning: ignoring non-numeric --height '{}'", height);
        }
    }

    let id = app.add_note(&draft);
    let note = note_snapshot(&app, id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&note)?);
    } else {
        println!(
            "Created note {} ({}, {}) {}x{} - {}",
            short(id),
            note.x,
            note.y,
            note.width,
            note.height,
            note.title
        );
    }

    close_board(app).await;
    Ok(())
}

pub async fn handle_list(board: PathBuf, json: bool) -> Result<()> {
    let app = open_board(&board).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(app.notes())?);
    } else if app.notes().is_empty() {
        println!("No notes found");
    } else {
        for note in app.notes() {
            println!(
                "{}  ({}, {})  {}x{}  {}  {}",
                short(note.id),
                note.x,
                note.y,
                note.width,
                note.height,
                note.color,
                note.title
            );
        }
    }

    close_board(app).await;
    Ok(())
}

pub async fn handle_drag(board: PathBuf, id: String, x: f64, y: f64) -> Result<()> {
    let mut app = open_board(&board).await?;
    let id = resolve_note(&app, &id)?;
    let note = note_snapshot(&app, id)?;

    // Grab the header at the note's corner, move, release.
    let release = Point::new(x, y);
    app.begin_drag(Point::new(note.x, note.y), id, DragMode::Move);
    app.pointer_move(release);
    let removed = app.pointer_release(release);

    if removed {
        println!("Deleted note {} (released over the trash zone)", short(id));
    } else {
        let note = note_snapshot(&app, id)?;
        println!("Moved note {} to ({}, {})", short(id), note.x, note.y);
    }

    close_board(app).await;
    Ok(())
}

pub async fn handle_resize(board: PathBuf, id: String, width: f64, height: f64) -> Result<()> {
    let mut app = open_board(&board).await?;
    let id = resolve_note(&app, &id)?;
    let note = note_snapshot(&app, id)?;

    // Grab the corner handle and move it by the size delta.
    app.begin_drag(
        Point::new(note.x + note.width, note.y + note.height),
        id,
        DragMode::Resize,
    );
    let release = Point::new(note.x + width, note.y + height);
    app.pointer_move(release);
    app.pointer_release(release);

    let note = note_snapshot(&app, id)?;
    println!(
        "Resized note {} to {}x{}",
        short(id),
        note.width,
        note.height
    );

    close_board(app).await;
    Ok(())
}

pub async fn handle_retitle(board: PathBuf, id: String, title: String) -> Result<()> {
    let mut app = open_board(&board).await?;
    let id = resolve_note(&app, &id)?;

    app.update_title(id, &title);
    // The edit session ends here, which is where blank titles normalize.
    app.finish_title_edit(id);

    let note = note_snapshot(&app, id)?;
    println!("Renamed note {} to '{}'", short(id), note.title);

    close_board(app).await;
    Ok(())
}

pub async fn handle_recolor(board: PathBuf, id: String, color: String) -> Result<()> {
    let mut app = open_board(&board).await?;
    let id = resolve_note(&app, &id)?;

    app.update_color(id, &color);
    println!("Recolored note {} to {}", short(id), color);

    close_board(app).await;
    Ok(())
}

pub async fn handle_edit(board: PathBuf, id: String, text: String) -> Result<()> {
    let mut app = open_board(&board).await?;
    let id = resolve_note(&app, &id)?;

    app.update_text(id, &text);
    println!("Updated note {}", short(id));

    close_board(app).await;
    Ok(())
}

pub async fn handle_front(board: PathBuf, id: String) -> Result<()> {
    let mut app = open_board(&board).await?;
    let id = resolve_note(&app, &id)?;

    app.bring_to_front(id);
    println!("Raised note {}", short(id));

    close_board(app).await;
    Ok(())
}

pub async fn handle_trash(board: PathBuf, id: String) -> Result<()> {
    let mut app = open_board(&board).await?;
    let id = resolve_note(&app, &id)?;
    let note = note_snapshot(&app, id)?;

    let target = Point::new(
        TRASH_ZONE.x + TRASH_ZONE.width / 2.0,
        TRASH_ZONE.y + TRASH_ZONE.height / 2.0,
    );
    app.begin_drag(Point::new(note.x, note.y), id, DragMode::Move);
    app.pointer_move(target);
    let removed = app.pointer_release(target);

    if removed {
        println!("Deleted note {}", short(id));
    } else {
        println!("Note {} was not deleted", short(id));
    }

    close_board(app).await;
    Ok(())
}
