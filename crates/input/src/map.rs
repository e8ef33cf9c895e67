//! Key mapping from terminal events to puzzle actions.

use crate::types::PuzzleAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to puzzle actions.
pub fn handle_key_event(key: KeyEvent) -> Option<PuzzleAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Cursor
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(PuzzleAction::CursorUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(PuzzleAction::CursorDown)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(PuzzleAction::CursorLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(PuzzleAction::CursorRight)
        }

        // Queue
        KeyCode::Char('1') => Some(PuzzleAction::Select(0)),
        KeyCode::Char('2') => Some(PuzzleAction::Select(1)),
        KeyCode::Char('3') => Some(PuzzleAction::Select(2)),
        KeyCode::Esc => Some(PuzzleAction::Deselect),

        // Actions
        KeyCode::Char(' ') | KeyCode::Enter => Some(PuzzleAction::Place),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(PuzzleAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
