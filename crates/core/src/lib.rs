//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of the block-placement puzzle: the board,
//! the shape catalog, placement validation, line clearing, scoring and the
//! block queue. It has **zero dependencies** on UI, input or I/O:
//!
//! - **Deterministic**: the random source is injected, so a seed or a fixed
//!   script reproduces a game exactly
//! - **Atomic**: a placement either writes every cell of the block or none
//! - **Allocation-free**: placements, clears and snapshots use fixed storage
//!
//! # Module Structure
//!
//! - [`board`]: 8x8 grid with placement validation and row/column clearing
//! - [`clear`]: simultaneous full row/column detection and [`ClearEvent`]s
//! - [`game_state`]: [`GameEngine`], the select → place → clear → score →
//!   replenish cycle
//! - [`queue`]: the three blocks on offer and the current selection
//! - [`rng`]: [`RandomSource`] and its seeded and scripted implementations
//! - [`scoring`]: 200 points per cleared line
//! - [`shapes`]: the eight block definitions
//! - [`snapshot`]: plain copyable state for renderers
//!
//! # Rules
//!
//! - A block may be placed anywhere all of its cells land on empty cells
//!   inside the board; there is no rotation and no gravity.
//! - After a placement every full row and every full column is cleared at
//!   once, including their shared cells; each line is worth 200 points.
//! - The front block of the queue is dropped and a new random block is
//!   appended after every successful placement.
//! - The game is over when no queued block fits anywhere.
//!
//! # Example
//!
//! ```
//! use gridfill_core::{GameEngine, PlacementOutcome, SequenceSource};
//! use gridfill_core::types::BlockKind;
//!
//! // Script the queue: LineFour, LineFour, LineFour, ...
//! let mut game = GameEngine::with_source(SequenceSource::new(vec![1]), 0);
//! assert_eq!(game.queue(), &[BlockKind::LineFour; 3]);
//!
//! game.select(0);
//! assert!(game.attempt_placement(0, 0).is_accepted());
//! game.select(0);
//! let outcome = game.attempt_placement(0, 4);
//!
//! // Row 0 is complete and clears immediately.
//! assert_eq!(outcome.clear_event().map(|e| e.lines()), Some(1));
//! assert_eq!(game.score(), 200);
//!
//! // Nothing selected: a no-op.
//! assert_eq!(game.attempt_placement(0, 0), PlacementOutcome::NoSelection);
//! ```

pub mod board;
pub mod clear;
pub mod game_state;
pub mod queue;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use gridfill_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clear::{apply_clear, clear_full_lines, detect_full_lines, CellPos, ClearEvent, FullLines};
pub use game_state::{EnginePhase, GameEngine, PlacementOutcome};
pub use queue::BlockQueue;
pub use rng::{RandomSource, SeededSource, SequenceSource};
pub use scoring::{calculate_clear_score, ScoreTracker};
pub use shapes::{definition, get_shape, pick_random, shape_cells, shape_extent, BlockDefinition, Shape, CATALOG};
pub use snapshot::GameSnapshot;
