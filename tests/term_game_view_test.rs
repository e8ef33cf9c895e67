use gridfill::core::snapshot::cell_code;
use gridfill::core::{ClearEvent, GameEngine, GameSnapshot, SequenceSource};
use gridfill::term::{block_color, AnchorY, FrameBuffer, GameView, Overlay, Rgb, Viewport};
use gridfill::types::BlockKind;

const VIEWPORT: Viewport = Viewport {
    width: 40,
    height: 20,
};

// With a 40-column viewport the 18-column frame starts at x = 11.
const FRAME_X: u16 = 11;

fn cell_x(col: u16) -> u16 {
    FRAME_X + 1 + col * 2
}

fn cell_y(row: u16) -> u16 {
    1 + row
}

fn view() -> GameView {
    GameView::default().with_anchor_y(AnchorY::Top)
}

fn glyph(fb: &FrameBuffer, row: u16, col: u16) -> char {
    fb.get(cell_x(col), cell_y(row)).unwrap().ch
}

#[test]
fn border_corners_frame_the_board() {
    let fb = view().render(&GameSnapshot::default(), Overlay::default(), VIEWPORT);

    assert_eq!(fb.get(FRAME_X, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(FRAME_X + 17, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(FRAME_X, 9).unwrap().ch, '└');
    assert_eq!(fb.get(FRAME_X + 17, 9).unwrap().ch, '┘');
}

#[test]
fn filled_cells_span_two_columns() {
    let mut snap = GameSnapshot::default();
    snap.board[0][0] = cell_code(Some(BlockKind::Square));

    let fb = view().render(&snap, Overlay::default(), VIEWPORT);

    let left = fb.get(cell_x(0), cell_y(0)).unwrap();
    let right = fb.get(cell_x(0) + 1, cell_y(0)).unwrap();
    assert_eq!(left.ch, '█');
    assert_eq!(right.ch, '█');
    assert_eq!(left.style.fg, block_color(BlockKind::Square));
    assert_eq!(glyph(&fb, 0, 1), '·');
}

#[test]
fn side_panel_shows_score_and_lines() {
    let mut snap = GameSnapshot::default();
    snap.score = 1200;
    snap.lines = 6;

    let fb = view().render(&snap, Overlay::default(), VIEWPORT);

    assert!(fb.row_text(0).contains("SCORE"));
    assert!(fb.row_text(1).contains("1200"));
    assert!(fb.row_text(3).contains("LINES"));
    assert!(fb.row_text(4).contains('6'));
}

#[test]
fn narrow_viewport_skips_side_panel() {
    let fb = view().render(&GameSnapshot::default(), Overlay::default(), Viewport::new(20, 18));
    assert!(!fb.text().contains("SCORE"));
}

#[test]
fn flash_marks_cleared_cells() {
    let mut event = ClearEvent::default();
    event.cells.push((2, 3));
    let overlay = Overlay {
        cursor: None,
        flash: Some(&event),
    };

    let fb = view().render(&GameSnapshot::default(), overlay, VIEWPORT);

    assert_eq!(glyph(&fb, 2, 3), '░');
    assert_eq!(glyph(&fb, 2, 4), '·');
}

#[test]
fn bare_cursor_without_selection() {
    let overlay = Overlay {
        cursor: Some((4, 5)),
        flash: None,
    };
    let fb = view().render(&GameSnapshot::default(), overlay, VIEWPORT);
    assert_eq!(glyph(&fb, 4, 5), '▫');
}

#[test]
fn preview_follows_selected_shape() {
    let mut snap = GameSnapshot::default();
    snap.queue = [BlockKind::Square; 3];
    snap.selected = Some(0);
    let overlay = Overlay {
        cursor: Some((0, 0)),
        flash: None,
    };

    let fb = view().render(&snap, overlay, VIEWPORT);

    for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        assert_eq!(glyph(&fb, row, col), '▒');
    }
    assert_eq!(glyph(&fb, 2, 0), '·');
    let style = fb.get(cell_x(0), cell_y(0)).unwrap().style;
    assert_eq!(style.fg, block_color(BlockKind::Square));
}

#[test]
fn preview_turns_red_when_it_does_not_fit() {
    let mut snap = GameSnapshot::default();
    snap.queue = [BlockKind::Square; 3];
    snap.selected = Some(0);
    let overlay = Overlay {
        cursor: Some((7, 7)),
        flash: None,
    };

    let fb = view().render(&snap, overlay, VIEWPORT);

    let cell = fb.get(cell_x(7), cell_y(7)).unwrap();
    assert_eq!(cell.ch, '▒');
    assert_eq!(cell.style.fg, Rgb::new(220, 60, 60));
}

#[test]
fn queue_marks_selected_slot() {
    let mut snap = GameSnapshot::default();
    snap.selected = Some(1);

    let fb = view().render(&snap, Overlay::default(), VIEWPORT);
    let labels = fb.row_text(10);

    assert!(labels.contains(" 1"));
    assert!(labels.contains(">2"));
    assert!(labels.contains(" 3"));
}

#[test]
fn game_over_banner() {
    let mut snap = GameSnapshot::default();
    snap.game_over = true;

    let fb = view().render(&snap, Overlay::default(), VIEWPORT);
    assert!(fb.text().contains("GAME OVER"));
}

#[test]
fn engine_snapshot_renders_placed_block() {
    let mut engine = GameEngine::with_source(SequenceSource::new(vec![7]), 0);
    engine.select(0);
    assert!(engine.attempt_placement(0, 2).is_accepted());

    let mut snap = GameSnapshot::default();
    engine.snapshot_into(&mut snap);
    let fb = view().render(&snap, Overlay::default(), VIEWPORT);

    for row in 0..4 {
        assert_eq!(glyph(&fb, row, 2), '█');
    }
    assert_eq!(glyph(&fb, 4, 2), '·');
    assert!(fb.row_text(4).contains('0'));
}
