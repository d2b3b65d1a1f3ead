//! Headless command loop behind `columns-script`.
//!
//! One command per input line, in the syntax of [`GameAction::parse`]. The
//! board is printed once up front and again after every command. Whenever no
//! faller is active the board is settled and checked for game over; on game over
//! `GAME OVER` is printed and the loop stops.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, warn};

use crate::core::BoardEngine;
use crate::types::{EngineError, FallerStatus, GameAction, ParsedLine};

/// Summary of one script run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptOutcome {
    /// Commands handed to the engine
    pub applied: usize,
    /// Lines that did not parse
    pub skipped: usize,
    pub game_over: bool,
}

/// Run commands from `input` against `engine`, printing boards to `out`
///
/// Unparseable lines are reported on `errors` and skipped. Stops at `Q`, end of
/// input, or game over.
pub fn run_script(
    engine: &mut BoardEngine,
    input: impl BufRead,
    mut out: impl Write,
    mut errors: impl Write,
) -> Result<ScriptOutcome> {
    let mut outcome = ScriptOutcome::default();
    write!(out, "{engine}")?;

    for line in input.lines() {
        let line = line?;
        let action = match GameAction::parse(&line) {
            Ok(ParsedLine::Action(action)) => action,
            Ok(ParsedLine::Quit) => break,
            Err(err) => {
                warn!(%err, "skipping line");
                writeln!(errors, "{err}")?;
                outcome.skipped += 1;
                continue;
            }
        };

        outcome.applied += 1;
        let over = match engine.apply(action) {
            Ok(_) => engine.status() == FallerStatus::None && engine.check_game_over(),
            Err(EngineError::GameOver) => true,
            Err(err) => return Err(err.into()),
        };
        write!(out, "{engine}")?;
        if over {
            writeln!(out, "GAME OVER")?;
            outcome.game_over = true;
            break;
        }
    }

    out.flush()?;
    debug!(
        applied = outcome.applied,
        skipped = outcome.skipped,
        game_over = outcome.game_over,
        "script finished"
    );
    Ok(outcome)
}
