//! Terminal Columns runner (default binary).
//!
//! Runs at a fixed frame rate: keys are applied as they arrive, and every
//! `--frames-per-fall` frames the faller takes one idle fall step. Rendering goes
//! through the framebuffer renderer in `columns-term`.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use columns::cli::{BoardArgs, LogArgs};
use columns::core::GameSnapshot;
use columns::input::{handle_key_event, should_quit};
use columns::session::{FallOutcome, Session};
use columns::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use columns::types::{FRAMES_PER_FALL, FRAME_MS};

/// Falling-jewel puzzle in the terminal
#[derive(Debug, Parser)]
#[command(name = "columns", version)]
struct Cli {
    #[command(flatten)]
    board: BoardArgs,
    /// Seed for the random fallers
    #[arg(long, default_value_t = 1)]
    seed: u32,
    /// Frames between idle fall steps (10 frames per second)
    #[arg(long, default_value_t = FRAMES_PER_FALL, value_parser = clap::value_parser!(u32).range(1..))]
    frames_per_fall: u32,
    #[command(flatten)]
    log: LogArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.log.init()?;

    let mut session = Session::new(cli.board.rows, cli.board.cols, cli.seed)?;
    info!(rows = cli.board.rows, cols = cli.board.cols, seed = cli.seed, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, cli.frames_per_fall);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session, frames_per_fall: u32) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let frame = Duration::from_millis(FRAME_MS);
    let mut last_frame = Instant::now();
    let mut frame_count: u32 = 0;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        session.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.handle(action);
                    }
                }
            }
        }

        // Frame.
        if last_frame.elapsed() >= frame {
            last_frame = Instant::now();
            frame_count = frame_count.wrapping_add(1);
            if frame_count % frames_per_fall == 0 && !session.is_game_over() {
                if let FallOutcome::GameOver = session.fall_step()? {
                    info!("game over");
                }
            }
        }
    }
}
