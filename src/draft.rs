// src/draft.rs
//! The creation form: proposed geometry, color and title for the next note.

use crate::note::{COLOR_POOL, MIN_SIZE};

/// Ephemeral form state, independent of the board until committed by
/// `Board::add_note`.
///
/// Numeric fields are edited through a parsing boundary: input that is not
/// a finite number is dropped and the previous value kept, so degenerate
/// geometry never reaches a note.
#[derive(Debug, Clone)]
pub struct NoteDraft {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
    pub title: String,
}

impl Default for NoteDraft {
    fn default() -> Self {
        Self {
            x: 80.0,
            y: 80.0,
            width: 220.0,
            height: 180.0,
            color: COLOR_POOL[0].to_string(),
            title: String::new(),
        }
    }
}

impl NoteDraft {
    /// Set the proposed x, floored at 0. Returns false if the input was
    /// rejected.
    pub fn set_x(&mut self, input: &str) -> bool {
        match parse_finite(input) {
            Some(value) => {
                self.x = value.max(0.0);
                true
            }
            None => false,
        }
    }

    /// Set the proposed y, floored at 0.
    pub fn set_y(&mut self, input: &str) -> bool {
        match parse_finite(input) {
            Some(value) => {
                self.y = value.max(0.0);
                true
            }
            None => false,
        }
    }

    /// Set the proposed width, floored at the minimum note size.
    pub fn set_width(&mut self, input: &str) -> bool {
        match parse_finite(input) {
            Some(value) => {
                self.width = value.max(MIN_SIZE);
                true
            }
            None => false,
        }
    }

    /// Set the proposed height, floored at the minimum note size.
    pub fn set_height(&mut self, input: &str) -> bool {
        match parse_finite(input) {
            Some(value) => {
                self.height = value.max(MIN_SIZE);
                true
            }
            None => false,
        }
    }
}

fn parse_finite(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_initial_form() {
        let draft = NoteDraft::default();
        assert_eq!(draft.x, 80.0);
        assert_eq!(draft.y, 80.0);
        assert_eq!(draft.width, 220.0);
        assert_eq!(draft.height, 180.0);
        assert_eq!(draft.color, COLOR_POOL[0]);
        assert!(draft.title.is_empty());
    }

    #[test]
    fn test_non_numeric_input_keeps_previous_value() {
        let mut draft = NoteDraft::default();
        assert!(!draft.set_x("abc"));
        assert!(!draft.set_width(""));
        assert!(!draft.set_height("NaN"));
        assert!(!draft.set_y("inf"));
        assert_eq!(draft.x, 80.0);
        assert_eq!(draft.y, 80.0);
        assert_eq!(draft.width, 220.0);
        assert_eq!(draft.height, 180.0);
    }

    #[test]
    fn test_position_floors_at_zero() {
        let mut draft = NoteDraft::default();
        assert!(draft.set_x("-50"));
        assert!(draft.set_y("12.5"));
        assert_eq!(draft.x, 0.0);
        assert_eq!(draft.y, 12.5);
    }

    #[test]
    fn test_size_floors_at_minimum() {
        let mut draft = NoteDraft::default();
        assert!(draft.set_width("40"));
        assert!(draft.set_height("300"));
        assert_eq!(draft.width, MIN_SIZE);
        assert_eq!(draft.height, 300.0);
    }
}
