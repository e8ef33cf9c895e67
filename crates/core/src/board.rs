//! Board module - manages the game grid
//!
//! The board is an 8x8 grid where each cell is empty or holds the kind of the
//! block that filled it. Storage is a flat row-major array, so the board is
//! `Copy`-sized, allocation-free and cheap to compare.
//! Coordinates: (row, col), both 0..7, row 0 at the top.

use crate::shapes::{get_shape, shape_cells, Shape};
use crate::types::{BlockKind, Cell, BOARD_SIZE};

/// Total number of cells on the board
const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// The game board - 8 rows x 8 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * SIZE + col)
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_SIZE as i8 || col < 0 || col >= BOARD_SIZE as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_SIZE as usize) + (col as usize))
    }

    /// Target index of a shape offset placed at an anchor.
    ///
    /// Offsets too large for `i8` can never land on the board.
    #[inline(always)]
    fn offset_index(row: i8, col: i8, dr: usize, dc: usize) -> Option<usize> {
        let dr = i8::try_from(dr).ok()?;
        let dc = i8::try_from(dc).ok()?;
        Self::index(row.checked_add(dr)?, col.checked_add(dc)?)
    }

    /// Side length of the board
    pub fn size(&self) -> u8 {
        BOARD_SIZE
    }

    /// Get cell at position (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at position (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_empty_at(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check whether every occupied cell of `shape`, anchored at (row, col),
    /// lands inside the board on an empty cell.
    ///
    /// Reads only; the board is never touched here.
    pub fn can_place(&self, row: i8, col: i8, shape: Shape) -> bool {
        shape_cells(shape).all(|(dr, dc)| {
            Self::offset_index(row, col, dr, dc).is_some_and(|idx| self.cells[idx].is_none())
        })
    }

    /// Place a block of `kind` with its catalog shape at (row, col)
    /// Returns true if successful, false (with no cell written) if any cell is
    /// out of bounds or occupied
    pub fn place(&mut self, row: i8, col: i8, kind: BlockKind) -> bool {
        self.place_shape(row, col, get_shape(kind), kind)
    }

    /// Place an arbitrary shape, filling its cells with `kind`.
    pub fn place_shape(&mut self, row: i8, col: i8, shape: Shape, kind: BlockKind) -> bool {
        // First check the whole shape
        if !self.can_place(row, col, shape) {
            return false;
        }

        // Then write all cells
        for (dr, dc) in shape_cells(shape) {
            if let Some(idx) = Self::offset_index(row, col, dr, dc) {
                self.cells[idx] = Some(kind);
            }
        }

        true
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_SIZE as usize {
            return false;
        }
        let start = row * BOARD_SIZE as usize;
        let end = start + BOARD_SIZE as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Check if a column is completely filled
    pub fn is_col_full(&self, col: usize) -> bool {
        if col >= BOARD_SIZE as usize {
            return false;
        }
        self.cells
            .iter()
            .skip(col)
            .step_by(BOARD_SIZE as usize)
            .all(|cell| cell.is_some())
    }

    /// Empty every cell of a row. Cells above do not shift.
    pub fn clear_row(&mut self, row: usize) {
        if row >= BOARD_SIZE as usize {
            return;
        }
        let start = row * BOARD_SIZE as usize;
        let end = start + BOARD_SIZE as usize;
        self.cells[start..end].fill(None);
    }

    /// Empty every cell of a column.
    pub fn clear_col(&mut self, col: usize) {
        if col >= BOARD_SIZE as usize {
            return;
        }
        for cell in self.cells.iter_mut().skip(col).step_by(BOARD_SIZE as usize) {
            *cell = None;
        }
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows as slices, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_SIZE as usize)
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from an ASCII picture, one string per row.
    ///
    /// `.` is empty; any other character fills the cell with `kind`.
    /// Missing rows or columns stay empty, extra ones are ignored.
    pub fn from_ascii(rows: &[&str], kind: BlockKind) -> Self {
        let mut board = Self::new();
        for (r, line) in rows.iter().enumerate().take(BOARD_SIZE as usize) {
            for (c, ch) in line.chars().enumerate().take(BOARD_SIZE as usize) {
                if ch != '.' {
                    board.cells[r * BOARD_SIZE as usize + c] = Some(kind);
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
