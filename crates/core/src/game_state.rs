//! Game state module - the game engine
//!
//! This module ties together the board, shape catalog, queue, clear detection
//! and scoring. All mutation goes through [`GameEngine::select`],
//! [`GameEngine::attempt_placement`] and [`GameEngine::restart`]; everything
//! else is a read-only accessor for the presentation layer.

use crate::board::Board;
use crate::clear::{apply_clear, detect_full_lines, ClearEvent};
use crate::queue::BlockQueue;
use crate::rng::{RandomSource, SeededSource};
use crate::scoring::ScoreTracker;
use crate::shapes::get_shape;
use crate::snapshot::{cell_code, GameSnapshot};
use crate::types::{BlockKind, BOARD_SIZE, QUEUE_LEN};

/// Where the engine is in the select/place cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    /// No block selected
    Idle,
    /// A queue slot is selected and waiting for a placement
    Selected(usize),
}

/// Result of [`GameEngine::attempt_placement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// Nothing was selected; no state changed.
    NoSelection,
    /// Out of bounds or overlapping; no state changed and the selection stays.
    Rejected,
    /// The block was placed. The event is empty when nothing cleared.
    Accepted(ClearEvent),
}

impl PlacementOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, PlacementOutcome::Accepted(_))
    }

    pub fn clear_event(&self) -> Option<&ClearEvent> {
        match self {
            PlacementOutcome::Accepted(event) => Some(event),
            _ => None,
        }
    }
}

/// One game session.
#[derive(Debug, Clone)]
pub struct GameEngine<R: RandomSource = SeededSource> {
    board: Board,
    queue: BlockQueue,
    score: ScoreTracker,
    rng: R,
    seed: u64,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Accepted placements this episode.
    placements: u32,
    /// Last clear event (consumed by the presentation layer).
    last_event: Option<ClearEvent>,
}

impl GameEngine<SeededSource> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_source(SeededSource::new(seed), seed)
    }
}

impl<R: RandomSource> GameEngine<R> {
    /// Create a game drawing blocks from `rng`.
    ///
    /// `seed` is only reported back through [`GameEngine::seed`] and snapshots.
    pub fn with_source(mut rng: R, seed: u64) -> Self {
        let queue = BlockQueue::new(&mut rng);
        Self {
            board: Board::new(),
            queue,
            score: ScoreTracker::new(),
            rng,
            seed,
            episode_id: 0,
            placements: 0,
            last_event: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn queue(&self) -> &[BlockKind; QUEUE_LEN] {
        self.queue.blocks()
    }

    pub fn selected(&self) -> Option<usize> {
        self.queue.selected()
    }

    pub fn selected_kind(&self) -> Option<BlockKind> {
        self.queue.selected_kind()
    }

    pub fn phase(&self) -> EnginePhase {
        match self.queue.selected() {
            Some(slot) => EnginePhase::Selected(slot),
            None => EnginePhase::Idle,
        }
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn lines_cleared(&self) -> u32 {
        self.score.lines_cleared()
    }

    pub fn placements(&self) -> u32 {
        self.placements
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Select a queue slot. Returns false for a slot outside the queue.
    pub fn select(&mut self, slot: usize) -> bool {
        self.queue.select(slot)
    }

    pub fn clear_selection(&mut self) {
        self.queue.clear_selection();
    }

    /// Place the selected block with its anchor at (row, col).
    ///
    /// Validation runs against the whole shape before anything is written.
    /// On success the full lines of the placed board are cleared and scored,
    /// then the queue is replenished and the selection reset.
    pub fn attempt_placement(&mut self, row: i8, col: i8) -> PlacementOutcome {
        let Some(kind) = self.queue.selected_kind() else {
            return PlacementOutcome::NoSelection;
        };

        if !self.board.can_place(row, col, get_shape(kind)) {
            return PlacementOutcome::Rejected;
        }

        let placed = self.board.place(row, col, kind);
        debug_assert!(placed, "place must succeed after can_place");

        let lines = detect_full_lines(&self.board);
        let event = if lines.is_empty() {
            ClearEvent::default()
        } else {
            let event = apply_clear(&mut self.board, &lines);
            self.score.award(lines.rows.len(), lines.cols.len());
            event
        };

        self.queue.replenish(&mut self.rng);
        self.placements = self.placements.saturating_add(1);

        if !event.is_empty() {
            self.last_event = Some(event.clone());
        }
        PlacementOutcome::Accepted(event)
    }

    /// Take and clear the last non-empty clear event.
    pub fn take_last_event(&mut self) -> Option<ClearEvent> {
        self.last_event.take()
    }

    /// Whether `kind` fits anywhere on the current board.
    pub fn can_place_anywhere(&self, kind: BlockKind) -> bool {
        let shape = get_shape(kind);
        (0..BOARD_SIZE as i8)
            .any(|row| (0..BOARD_SIZE as i8).any(|col| self.board.can_place(row, col, shape)))
    }

    /// Whether any queued block can still be placed.
    pub fn has_valid_move(&self) -> bool {
        self.queue
            .blocks()
            .iter()
            .any(|&kind| self.can_place_anywhere(kind))
    }

    /// No queued block fits anywhere: the session is over.
    pub fn is_game_over(&self) -> bool {
        !self.has_valid_move()
    }

    /// Start a new episode: empty board, zero score, fresh queue.
    ///
    /// The RNG stream continues, so a restarted game does not replay the
    /// previous queue.
    pub fn restart(&mut self) {
        self.board.clear();
        self.queue = BlockQueue::new(&mut self.rng);
        self.score.reset();
        self.placements = 0;
        self.last_event = None;
        self.episode_id = self.episode_id.wrapping_add(1);
    }

    /// Write a snapshot into `out` without allocating.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (r, row) in self.board.rows().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                out.board[r][c] = cell_code(*cell);
            }
        }
        out.queue = *self.queue.blocks();
        out.selected = self.queue.selected().map(|slot| slot as u8);
        out.score = self.score.score();
        out.lines = self.score.lines_cleared();
        out.placements = self.placements;
        out.episode_id = self.episode_id;
        out.seed = self.seed;
        out.game_over = self.is_game_over();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameEngine<SeededSource> {
    fn default() -> Self {
        Self::new(1)
    }
}
