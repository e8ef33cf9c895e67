//! Scoring module - flat per-line clear bonus
//!
//! Every cleared row or column is worth [`LINE_CLEAR_POINTS`]. There are no
//! multipliers, combos or caps; the total saturates instead of wrapping.

use crate::types::LINE_CLEAR_POINTS;

/// Points for clearing `rows` rows and `cols` columns in one placement.
pub fn calculate_clear_score(rows: usize, cols: usize) -> u32 {
    let lines = u32::try_from(rows.saturating_add(cols)).unwrap_or(u32::MAX);
    lines.saturating_mul(LINE_CLEAR_POINTS)
}

/// Running score for one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScoreTracker {
    score: u32,
    lines_cleared: u32,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the points for a clear and return how many were awarded.
    pub fn award(&mut self, rows: usize, cols: usize) -> u32 {
        let points = calculate_clear_score(rows, cols);
        self.score = self.score.saturating_add(points);
        self.lines_cleared = self
            .lines_cleared
            .saturating_add(u32::try_from(rows + cols).unwrap_or(u32::MAX));
        points
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Rows plus columns cleared so far.
    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
