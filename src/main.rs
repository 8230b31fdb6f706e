//! Terminal snake runner.
//!
//! Owns the single game loop: poll crossterm input with a frame-sized
//! timeout, forward direction requests, advance the simulation by measured
//! elapsed time and flush the view. Sound cues come back from the simulation
//! as events and are played as the terminal bell.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::GameState;
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{GameView, TerminalRenderer, Viewport};

/// Input poll granularity. Finer than the 300ms movement interval so turns
/// feel immediate.
const FRAME: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(clock_seed());
    let view = GameView::default();
    let mut last = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, Viewport::new(w, h));
        term.draw(&fb)?;

        let timeout = FRAME.saturating_sub(last.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(dir) = handle_key_event(key) {
                        game.request_direction(dir);
                    }
                }
            }
        }

        let elapsed = last.elapsed();
        if elapsed >= FRAME {
            last = Instant::now();
            game.tick(elapsed.as_millis() as u32);
            if game.take_cue().is_some() {
                term.bell()?;
            }
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
