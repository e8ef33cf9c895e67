use crate::types::{BlockKind, BOARD_SIZE, QUEUE_LEN};

const N: usize = BOARD_SIZE as usize;

/// Plain, copyable view of a game session for renderers and tests.
///
/// Board cells are encoded as `0` for empty and `kind.index() + 1` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; N]; N],
    pub queue: [BlockKind; QUEUE_LEN],
    pub selected: Option<u8>,
    pub score: u32,
    pub lines: u32,
    pub placements: u32,
    pub episode_id: u32,
    pub seed: u64,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; N]; N];
        self.queue = [BlockKind::Square; QUEUE_LEN];
        self.selected = None;
        self.score = 0;
        self.lines = 0;
        self.placements = 0;
        self.episode_id = 0;
        self.seed = 0;
        self.game_over = false;
    }

    /// Decode a board cell back into its block kind.
    pub fn cell(&self, row: usize, col: usize) -> Option<BlockKind> {
        let code = *self.board.get(row)?.get(col)?;
        code.checked_sub(1)
            .and_then(|i| BlockKind::ALL.get(i as usize).copied())
    }

    pub fn selected_kind(&self) -> Option<BlockKind> {
        self.selected
            .and_then(|slot| self.queue.get(slot as usize).copied())
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[0u8; N]; N],
            queue: [BlockKind::Square; QUEUE_LEN],
            selected: None,
            score: 0,
            lines: 0,
            placements: 0,
            episode_id: 0,
            seed: 0,
            game_over: false,
        };
        s.clear();
        s
    }
}

/// Encode a board cell the way [`GameSnapshot::board`] stores it.
pub fn cell_code(cell: Option<BlockKind>) -> u8 {
    cell.map(|k| k.index() as u8 + 1).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_code_roundtrips_through_snapshot() {
        let mut snap = GameSnapshot::default();
        snap.board[3][4] = cell_code(Some(BlockKind::Zig));
        assert_eq!(snap.cell(3, 4), Some(BlockKind::Zig));
        assert_eq!(snap.cell(0, 0), None);
        assert_eq!(snap.cell(9, 0), None);
    }
}
