// src/note.rs
//! The persisted note card entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Colors offered for new notes and swatch menus.
pub const COLOR_POOL: [&str; 5] = ["#fff2a8", "#ffd1dc", "#d9f8d9", "#d7e8ff", "#ffe0b5"];

/// Minimum width/height a note can be created or resized to.
pub const MIN_SIZE: f64 = 120.0;

/// Title substituted whenever a note's title is blank after trimming.
pub const UNTITLED: &str = "Untitled note";

/// A single note card. Position and size are board-local units; the
/// sequence a note lives in defines its z-order (later renders on top).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Note {
        Note {
            id: Uuid::new_v4(),
            title: "Groceries".to_string(),
            x: 80.0,
            y: 80.0,
            width: 220.0,
            height: 180.0,
            color: COLOR_POOL[0].to_string(),
            text: "milk, eggs".to_string(),
        }
    }

    #[test]
    fn test_json_shape_matches_stored_format() {
        let note = sample();
        let value = serde_json::to_value(&note).unwrap();

        let object = value.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["color", "height", "id", "text", "title", "width", "x", "y"]
        );
        assert_eq!(value["title"], "Groceries");
        assert_eq!(value["x"], 80.0);
        assert_eq!(value["color"], "#fff2a8");
    }

    #[test]
    fn test_sequence_round_trips_through_json() {
        let notes = vec![sample(), sample(), sample()];
        let raw = serde_json::to_string(&notes).unwrap();
        let parsed: Vec<Note> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, notes);
    }
}
