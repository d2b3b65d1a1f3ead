//! Session: the driver loop's view of one game.
//!
//! Wraps a [`BoardEngine`] with a [`FallerRng`] and implements the idle fall:
//! tick the faller; once it has finalised, settle the board, check for game over,
//! and spawn the next random faller.

use tracing::{debug, info};

use crate::core::{BoardEngine, FallerRng, GameSnapshot};
use crate::types::{EngineError, FallerStatus, GameAction};

/// What one idle fall step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallOutcome {
    /// The faller took a tick and now has this status
    Ticked(FallerStatus),
    /// The board settled (clearing `cleared` jewels) and a new faller spawned
    Spawned { cleared: usize },
    GameOver,
}

pub struct Session {
    engine: BoardEngine,
    rng: FallerRng,
}

impl Session {
    pub fn new(rows: usize, cols: usize, seed: u32) -> Result<Self, EngineError> {
        Ok(Self {
            engine: BoardEngine::new(rows, cols)?,
            rng: FallerRng::new(seed),
        })
    }

    pub fn from_engine(engine: BoardEngine, seed: u32) -> Self {
        Self {
            engine,
            rng: FallerRng::new(seed),
        }
    }

    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    pub fn is_game_over(&self) -> bool {
        self.engine.is_game_over()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.engine.snapshot_into(out);
    }

    /// Apply a player command; false if it was ignored or the game is over
    pub fn handle(&mut self, action: GameAction) -> bool {
        match self.engine.apply(action) {
            Ok(applied) => applied,
            Err(err) => {
                debug!(action = action.as_str(), %err, "command rejected");
                false
            }
        }
    }

    /// One idle fall step, called every `frames_per_fall` frames
    pub fn fall_step(&mut self) -> Result<FallOutcome, EngineError> {
        match self.engine.status() {
            FallerStatus::Falling | FallerStatus::Landed | FallerStatus::Frozen => {
                match self.engine.advance_tick() {
                    Ok(FallerStatus::None) => {}
                    Ok(status) => return Ok(FallOutcome::Ticked(status)),
                    Err(EngineError::GameOver) => return Ok(FallOutcome::GameOver),
                    Err(err) => return Err(err),
                }
            }
            FallerStatus::None => {}
        }
        self.settle_and_spawn()
    }

    fn settle_and_spawn(&mut self) -> Result<FallOutcome, EngineError> {
        let report = match self.engine.settle_and_clear() {
            Ok(report) => report,
            Err(EngineError::GameOver) => return Ok(FallOutcome::GameOver),
            Err(err) => return Err(err),
        };
        if self.engine.check_game_over() {
            info!(cleared = report.cleared, "session ended");
            return Ok(FallOutcome::GameOver);
        }

        let board = self.engine.board();
        let spec = match self.rng.next_spec(board) {
            Some(spec) => spec,
            None => self.rng.spec_in_any_column(board.cols()),
        };
        match self.engine.spawn(spec) {
            Ok(_) => Ok(FallOutcome::Spawned {
                cleared: report.cleared,
            }),
            Err(EngineError::GameOver) => Ok(FallOutcome::GameOver),
            Err(err) => Err(err),
        }
    }
}
