//! Board tests - placement validation and line clearing

use gridfill::core::{clear_full_lines, get_shape, Board};
use gridfill::types::{BlockKind, BOARD_SIZE};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.size(), BOARD_SIZE);

    for row in 0..BOARD_SIZE as i8 {
        for col in 0..BOARD_SIZE as i8 {
            assert!(board.is_empty_at(row, col), "({}, {}) should be empty", row, col);
            assert_eq!(board.get(row, col), Some(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_SIZE as i8, 0), None);
    assert_eq!(board.get(0, BOARD_SIZE as i8), None);
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();

    assert!(!board.set(-1, 0, Some(BlockKind::Tee)));
    assert!(!board.set(0, 8, Some(BlockKind::Tee)));
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_place_success() {
    let mut board = Board::new();

    assert!(board.place(3, 5, BlockKind::Square));

    assert_eq!(board.get(3, 5), Some(Some(BlockKind::Square)));
    assert_eq!(board.get(3, 6), Some(Some(BlockKind::Square)));
    assert_eq!(board.get(4, 5), Some(Some(BlockKind::Square)));
    assert_eq!(board.get(4, 6), Some(Some(BlockKind::Square)));
    assert_eq!(board.filled_count(), 4);
}

#[test]
fn test_board_place_collision_writes_nothing() {
    let mut board = Board::new();
    board.set(4, 6, Some(BlockKind::Tee));
    let before = board.clone();

    assert!(!board.can_place(3, 5, get_shape(BlockKind::Square)));
    assert!(!board.place(3, 5, BlockKind::Square));

    assert_eq!(board, before);
}

#[test]
fn test_board_place_partially_out_of_bounds_writes_nothing() {
    let mut board = Board::new();

    // Cols 5..=8: the last cell falls off the right edge.
    assert!(!board.can_place(0, 5, get_shape(BlockKind::LineFour)));
    assert!(!board.place(0, 5, BlockKind::LineFour));
    // Rows 5..=8: falls off the bottom.
    assert!(!board.place(5, 0, BlockKind::Column));
    // Entirely outside.
    assert!(!board.place(-4, -4, BlockKind::Square));

    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_place_flush_with_edges() {
    let mut board = Board::new();

    assert!(board.place(0, 4, BlockKind::LineFour));
    assert!(board.place(4, 7, BlockKind::Column));
    assert!(board.place(6, 0, BlockKind::Square));
    assert_eq!(board.filled_count(), 12);
}

#[test]
fn test_square_at_bottom_right_corner_is_rejected() {
    let board = Board::new();
    assert!(!board.can_place(7, 7, get_shape(BlockKind::Square)));
    assert!(board.can_place(6, 6, get_shape(BlockKind::Square)));
}

#[test]
fn test_board_is_row_full() {
    let mut board = Board::new();
    assert!(!board.is_row_full(5));

    for col in 0..BOARD_SIZE as i8 {
        board.set(5, col, Some(BlockKind::Tee));
    }
    assert!(board.is_row_full(5));

    for col in 0..BOARD_SIZE as i8 - 1 {
        board.set(6, col, Some(BlockKind::LineFour));
    }
    assert!(!board.is_row_full(6));
    assert!(!board.is_row_full(99));
}

#[test]
fn test_board_is_col_full() {
    let mut board = Board::new();
    assert!(!board.is_col_full(2));

    for row in 0..BOARD_SIZE as i8 {
        board.set(row, 2, Some(BlockKind::Column));
    }
    assert!(board.is_col_full(2));
    assert!(!board.is_col_full(3));
    assert!(!board.is_col_full(99));
}

#[test]
fn test_board_clear_row_does_not_shift() {
    let mut board = Board::new();
    for col in 0..BOARD_SIZE as i8 {
        board.set(5, col, Some(BlockKind::Tee));
    }
    board.set(4, 1, Some(BlockKind::Square));

    board.clear_row(5);

    for col in 0..BOARD_SIZE as i8 {
        assert_eq!(board.get(5, col), Some(None));
    }
    // No gravity: the cell above stays where it was.
    assert_eq!(board.get(4, 1), Some(Some(BlockKind::Square)));
}

#[test]
fn test_board_clear_col() {
    let mut board = Board::new();
    for row in 0..BOARD_SIZE as i8 {
        board.set(row, 0, Some(BlockKind::Column));
    }
    board.set(0, 1, Some(BlockKind::Zig));

    board.clear_col(0);

    assert!(!board.is_col_full(0));
    assert_eq!(board.filled_count(), 1);
    assert_eq!(board.get(0, 1), Some(Some(BlockKind::Zig)));
}

#[test]
fn test_clear_full_lines_rows_and_cols_together() {
    let mut board = Board::from_ascii(
        &[
            "...#....",
            "...#....",
            "...#....",
            "########",
            "...#....",
            "...#....",
            "...#....",
            "...#..#.",
        ],
        BlockKind::Tee,
    );

    let event = clear_full_lines(&mut board);

    assert_eq!(event.rows.as_slice(), &[3]);
    assert_eq!(event.cols.as_slice(), &[3]);
    // 8 + 8 minus the shared cell.
    assert_eq!(event.cells.len(), 15);
    assert!(event.contains(3, 3));
    assert_eq!(board.get(3, 3), Some(None));
    assert_eq!(board.filled_count(), 1);
    assert_eq!(board.get(7, 6), Some(Some(BlockKind::Tee)));
}

#[test]
fn test_board_clear() {
    let mut board = Board::new();
    board.place(0, 0, BlockKind::LineFour);
    board.clear();
    assert_eq!(board, Board::new());
}

#[test]
fn test_board_rows_reference() {
    let board = Board::new();
    assert_eq!(board.cells().len(), 64);
    assert_eq!(board.rows().count(), BOARD_SIZE as usize);
    assert!(board.rows().all(|row| row.len() == BOARD_SIZE as usize));
}
