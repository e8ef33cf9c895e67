//! Terminal gridfill runner (default binary).
//!
//! Owns the one game session, the board cursor and the clear-flash timer.
//! The engine only ever sees `select`, `attempt_placement` and `restart`.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use gridfill::core::{ClearEvent, GameEngine, GameSnapshot, PlacementOutcome};
use gridfill::input::{handle_key_event, should_quit, Cursor};
use gridfill::term::{FrameBuffer, GameView, Overlay, TerminalRenderer, Viewport};
use gridfill::types::{PuzzleAction, CLEAR_FLASH_MS, TICK_MS};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Seed for the block queue; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

/// Cells from the last clear and when they started flashing.
struct Flash {
    event: ClearEvent,
    since: Instant,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, seed: u64) -> Result<()> {
    let mut game = GameEngine::new(seed);
    let view = GameView::default();
    let mut cursor = Cursor::default();
    let mut flash: Option<Flash> = None;
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick = Duration::from_millis(TICK_MS as u64);
    let flash_for = Duration::from_millis(CLEAR_FLASH_MS as u64);

    loop {
        if flash.as_ref().is_some_and(|f| f.since.elapsed() >= flash_for) {
            flash = None;
        }

        game.snapshot_into(&mut snap);
        let overlay = Overlay {
            cursor: Some((cursor.row, cursor.col)),
            flash: flash.as_ref().map(|f| &f.event),
        };
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, overlay, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if !event::poll(tick)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                let Some(action) = handle_key_event(key) else {
                    continue;
                };
                if cursor.apply(action) {
                    continue;
                }
                match action {
                    PuzzleAction::Select(slot) => {
                        game.select(slot as usize);
                    }
                    PuzzleAction::Deselect => game.clear_selection(),
                    PuzzleAction::Place => {
                        let (row, col) = cursor.anchor();
                        if let PlacementOutcome::Accepted(_) = game.attempt_placement(row, col) {
                            if let Some(event) = game.take_last_event() {
                                flash = Some(Flash {
                                    event,
                                    since: Instant::now(),
                                });
                            }
                        }
                    }
                    PuzzleAction::Restart => {
                        game.restart();
                        flash = None;
                    }
                    _ => {}
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
