use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridfill::core::{clear_full_lines, Board, GameEngine, GameSnapshot};
use gridfill::term::{AnchorY, GameView, Overlay, Viewport};
use gridfill::types::BlockKind;

fn bench_attempt_placement(c: &mut Criterion) {
    let mut engine = GameEngine::new(12345);

    c.bench_function("attempt_placement", |b| {
        b.iter(|| {
            engine.select(0);
            let outcome = engine.attempt_placement(black_box(2), black_box(2));
            if !outcome.is_accepted() {
                engine.restart();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_row_and_col", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for i in 0..8 {
                board.set(3, i, Some(BlockKind::LineFour));
                board.set(i, 5, Some(BlockKind::Column));
            }
            clear_full_lines(&mut board)
        })
    });
}

fn bench_game_over_check(c: &mut Criterion) {
    let mut engine = GameEngine::new(12345);
    // Scatter a few blocks so the scan does not stop at (0, 0).
    for (row, col) in [(0, 0), (0, 4), (3, 1), (5, 5)] {
        engine.select(0);
        engine.attempt_placement(row, col);
    }

    c.bench_function("is_game_over", |b| b.iter(|| black_box(engine.is_game_over())));
}

fn bench_snapshot_into(c: &mut Criterion) {
    let engine = GameEngine::new(12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            engine.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let engine = GameEngine::new(12345);
    let snap = engine.snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let viewport = Viewport::new(80, 24);
    let mut fb = view.render(&snap, Overlay::default(), viewport);

    c.bench_function("render_into", |b| {
        b.iter(|| {
            let overlay = Overlay {
                cursor: Some((3, 3)),
                flash: None,
            };
            view.render_into(black_box(&snap), overlay, viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_attempt_placement,
    bench_line_clear,
    bench_game_over_check,
    bench_snapshot_into,
    bench_render
);
criterion_main!(benches);
