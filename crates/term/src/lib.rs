//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. It renders into a plain
//! framebuffer that is then flushed to the terminal, instead of using a
//! widget toolkit, so the board keeps a fixed 2:1 cell aspect.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure: snapshot + overlay in, framebuffer out
//! - Own nothing about timing; the caller decides how long a clear flashes

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use gridfill_core as core;
pub use gridfill_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{block_color, AnchorY, GameView, Overlay, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
