//! Board cursor used to aim placements.

use crate::types::{PuzzleAction, BOARD_SIZE};

/// Anchor cell the next placement targets. Always inside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: u8,
    pub col: u8,
}

impl Cursor {
    pub fn new(row: u8, col: u8) -> Self {
        let max = BOARD_SIZE - 1;
        Self {
            row: row.min(max),
            col: col.min(max),
        }
    }

    /// Move for a cursor action, clamped to the board edges.
    /// Returns true if the action was a cursor movement.
    pub fn apply(&mut self, action: PuzzleAction) -> bool {
        let max = BOARD_SIZE - 1;
        match action {
            PuzzleAction::CursorUp => self.row = self.row.saturating_sub(1),
            PuzzleAction::CursorDown => self.row = (self.row + 1).min(max),
            PuzzleAction::CursorLeft => self.col = self.col.saturating_sub(1),
            PuzzleAction::CursorRight => self.col = (self.col + 1).min(max),
            _ => return false,
        }
        true
    }

    /// Anchor in the engine's signed coordinates.
    pub fn anchor(&self) -> (i8, i8) {
        (self.row as i8, self.col as i8)
    }
}
