use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Note id '{0}' matches more than one note")]
    AmbiguousNoteId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, BoardError>;
