//! Core types module - shared data structures and constants
//!
//! Pure data used by the engine, the terminal renderer and the input layer.
//! Nothing in here depends on I/O or on any other crate.
//!
//! # Board
//!
//! The play area is a square grid of [`BOARD_SIZE`] x [`BOARD_SIZE`] cells,
//! addressed as `(row, col)` with `(0, 0)` at the top-left.
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_SIZE` | 8 | Rows and columns of the board |
//! | `QUEUE_LEN` | 3 | Blocks offered to the player at once |
//! | `LINE_CLEAR_POINTS` | 200 | Points per cleared row or column |
//! | `CLEAR_FLASH_MS` | 300 | How long the terminal shows cleared cells |
//! | `TICK_MS` | 16 | Frame interval of the terminal loop |
//!
//! # Examples
//!
//! ```
//! use gridfill_types::{BlockKind, PuzzleAction, BOARD_SIZE};
//!
//! let kind = BlockKind::from_str("tee").unwrap();
//! assert_eq!(kind, BlockKind::Tee);
//! assert_eq!(kind.as_str(), "tee");
//!
//! assert_eq!(PuzzleAction::from_str("place"), Some(PuzzleAction::Place));
//! assert_eq!(BOARD_SIZE, 8);
//! ```

/// Rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// Number of blocks offered in the queue.
pub const QUEUE_LEN: usize = 3;

/// Points awarded for each cleared row or column.
pub const LINE_CLEAR_POINTS: u32 = 200;

/// Duration the presentation layer highlights cleared cells.
pub const CLEAR_FLASH_MS: u32 = 300;

/// Fixed frame interval of the terminal loop (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// The eight block kinds in the catalog.
///
/// The kind doubles as the color identifier written into board cells:
/// - **Square**: 2x2, yellow
/// - **LineFour**: horizontal 1x4, cyan
/// - **LineThree**: horizontal 1x3, teal
/// - **LRight**: 3-tall L with the foot to the right, orange
/// - **LLeft**: 3-tall L with the foot to the left, blue
/// - **Zig**: Z tetromino, red
/// - **Tee**: T tetromino, magenta
/// - **Column**: vertical 4x1, green
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Square,
    LineFour,
    LineThree,
    LRight,
    LLeft,
    Zig,
    Tee,
    Column,
}

impl BlockKind {
    /// Every kind, in catalog order.
    pub const ALL: [BlockKind; 8] = [
        BlockKind::Square,
        BlockKind::LineFour,
        BlockKind::LineThree,
        BlockKind::LRight,
        BlockKind::LLeft,
        BlockKind::Zig,
        BlockKind::Tee,
        BlockKind::Column,
    ];

    /// Position of this kind in [`BlockKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            BlockKind::Square => 0,
            BlockKind::LineFour => 1,
            BlockKind::LineThree => 2,
            BlockKind::LRight => 3,
            BlockKind::LLeft => 4,
            BlockKind::Zig => 5,
            BlockKind::Tee => 6,
            BlockKind::Column => 7,
        }
    }

    /// Parse a block kind from its name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use gridfill_types::BlockKind;
    ///
    /// assert_eq!(BlockKind::from_str("square"), Some(BlockKind::Square));
    /// assert_eq!(BlockKind::from_str("LINE4"), Some(BlockKind::LineFour));
    /// assert_eq!(BlockKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "square" => Some(BlockKind::Square),
            "line4" => Some(BlockKind::LineFour),
            "line3" => Some(BlockKind::LineThree),
            "lright" => Some(BlockKind::LRight),
            "lleft" => Some(BlockKind::LLeft),
            "zig" => Some(BlockKind::Zig),
            "tee" => Some(BlockKind::Tee),
            "column" => Some(BlockKind::Column),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Square => "square",
            BlockKind::LineFour => "line4",
            BlockKind::LineThree => "line3",
            BlockKind::LRight => "lright",
            BlockKind::LLeft => "lleft",
            BlockKind::Zig => "zig",
            BlockKind::Tee => "tee",
            BlockKind::Column => "column",
        }
    }
}

/// Cell on the board (None = empty, Some = filled by a block of that kind)
pub type Cell = Option<BlockKind>;

/// Player intents produced by the input layer.
///
/// The engine never sees these directly; the terminal loop translates them
/// into cursor movement, selection and placement calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleAction {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Select queue slot `0..QUEUE_LEN`.
    Select(u8),
    Deselect,
    Place,
    Restart,
}

impl PuzzleAction {
    /// Parse action from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(PuzzleAction::CursorUp),
            "down" => Some(PuzzleAction::CursorDown),
            "left" => Some(PuzzleAction::CursorLeft),
            "right" => Some(PuzzleAction::CursorRight),
            "select1" => Some(PuzzleAction::Select(0)),
            "select2" => Some(PuzzleAction::Select(1)),
            "select3" => Some(PuzzleAction::Select(2)),
            "deselect" => Some(PuzzleAction::Deselect),
            "place" => Some(PuzzleAction::Place),
            "restart" => Some(PuzzleAction::Restart),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            PuzzleAction::CursorUp => "up",
            PuzzleAction::CursorDown => "down",
            PuzzleAction::CursorLeft => "left",
            PuzzleAction::CursorRight => "right",
            PuzzleAction::Select(0) => "select1",
            PuzzleAction::Select(1) => "select2",
            PuzzleAction::Select(_) => "select3",
            PuzzleAction::Deselect => "deselect",
            PuzzleAction::Place => "place",
            PuzzleAction::Restart => "restart",
        }
    }
}
