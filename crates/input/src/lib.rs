//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::PuzzleAction`] and keeps
//! the board cursor the player aims placements with. The engine never sees
//! key events or the cursor, only the resulting select/place calls.

pub mod cursor;
pub mod map;

pub use gridfill_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit};
