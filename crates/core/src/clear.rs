//! Line clear detection
//!
//! Full rows and full columns are collected in a single scan of the
//! post-placement board and then cleared together, so a row and a column that
//! complete on the same move both count, sharing their intersection cell.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::BOARD_SIZE;

const N: usize = BOARD_SIZE as usize;

/// A board coordinate `(row, col)`.
pub type CellPos = (u8, u8);

/// Rows and columns that are completely filled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FullLines {
    pub rows: ArrayVec<u8, N>,
    pub cols: ArrayVec<u8, N>,
}

impl FullLines {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }

    /// Total cleared lines (rows + columns).
    pub fn count(&self) -> usize {
        self.rows.len() + self.cols.len()
    }
}

/// Cells removed by one placement, for the presentation layer to animate.
///
/// Every cell appears once, even where a cleared row crosses a cleared column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearEvent {
    pub rows: ArrayVec<u8, N>,
    pub cols: ArrayVec<u8, N>,
    pub cells: ArrayVec<CellPos, { N * N }>,
}

impl ClearEvent {
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cleared lines (rows + columns).
    pub fn lines(&self) -> usize {
        self.rows.len() + self.cols.len()
    }

    pub fn contains(&self, row: u8, col: u8) -> bool {
        self.cells.contains(&(row, col))
    }
}

/// Scan every row and column of `board` for full occupancy.
pub fn detect_full_lines(board: &Board) -> FullLines {
    let mut lines = FullLines::default();
    for i in 0..N {
        if board.is_row_full(i) {
            lines.rows.push(i as u8);
        }
        if board.is_col_full(i) {
            lines.cols.push(i as u8);
        }
    }
    lines
}

/// Record the cells of `lines`, then empty them.
///
/// Cells are collected before anything is zeroed so the event reflects the
/// board as it looked with the lines complete.
pub fn apply_clear(board: &mut Board, lines: &FullLines) -> ClearEvent {
    let mut event = ClearEvent {
        rows: lines.rows.clone(),
        cols: lines.cols.clone(),
        cells: ArrayVec::new(),
    };

    for row in 0..N as u8 {
        for col in 0..N as u8 {
            if lines.rows.contains(&row) || lines.cols.contains(&col) {
                event.cells.push((row, col));
            }
        }
    }

    for &row in &lines.rows {
        board.clear_row(row as usize);
    }
    for &col in &lines.cols {
        board.clear_col(col as usize);
    }

    event
}

/// Detect and clear in one step.
pub fn clear_full_lines(board: &mut Board) -> ClearEvent {
    let lines = detect_full_lines(board);
    if lines.is_empty() {
        return ClearEvent::default();
    }
    apply_clear(board, &lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BlockKind;

    #[test]
    fn test_empty_board_has_no_lines() {
        let board = Board::new();
        assert!(detect_full_lines(&board).is_empty());
    }

    #[test]
    fn test_detects_row_and_column_in_one_pass() {
        let mut board = Board::new();
        for i in 0..8 {
            board.set(2, i, Some(BlockKind::Square));
            board.set(i, 5, Some(BlockKind::Square));
        }

        let lines = detect_full_lines(&board);
        assert_eq!(lines.rows.as_slice(), &[2]);
        assert_eq!(lines.cols.as_slice(), &[5]);
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn test_apply_clear_dedupes_intersection() {
        let mut board = Board::new();
        for i in 0..8 {
            board.set(2, i, Some(BlockKind::Square));
            board.set(i, 5, Some(BlockKind::Square));
        }
        board.set(0, 0, Some(BlockKind::Tee));

        let event = clear_full_lines(&mut board);
        assert_eq!(event.cells.len(), 15);
        assert!(event.contains(2, 5));
        assert_eq!(board.get(2, 5), Some(None));
        // Unrelated cells survive.
        assert_eq!(board.get(0, 0), Some(Some(BlockKind::Tee)));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_full_board_clears_everything() {
        let mut board = Board::new();
        for r in 0..8 {
            for c in 0..8 {
                board.set(r, c, Some(BlockKind::Column));
            }
        }
        let event = clear_full_lines(&mut board);
        assert_eq!(event.lines(), 16);
        assert_eq!(event.cells.len(), 64);
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_no_full_line_is_noop() {
        let mut board = Board::new();
        for c in 0..7 {
            board.set(0, c, Some(BlockKind::LineFour));
        }
        let before = board.clone();
        let event = clear_full_lines(&mut board);
        assert!(event.is_empty());
        assert_eq!(board, before);
    }
}
