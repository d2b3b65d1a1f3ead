//! Board engine - owns the grid and the faller and applies every transition
//!
//! The engine is a small synchronous state machine. A driver issues one command
//! at a time (spawn, move, rotate, tick, settle) and reads the board back through
//! queries or a [`GameSnapshot`]. Nothing here blocks or keeps time.
//!
//! Piece lifecycle:
//!
//! ```text
//! None --spawn--> Falling --blocked--> Landed --tick, still blocked--> Frozen --tick--> None
//!                    ^                    |
//!                    +----support lost----+
//! ```
//!
//! After the faller finalises, [`BoardEngine::settle_and_clear`] runs gravity and
//! clears matches until the board is quiescent, and [`BoardEngine::check_game_over`]
//! inspects the spawn buffer.

use std::fmt;

use tracing::{debug, trace};

use crate::board::Board;
use crate::faller::Faller;
use crate::matching::find_matches;
use crate::snapshot::{FallerSnapshot, GameSnapshot};
use crate::types::{
    EngineError, FallerSpec, FallerStatus, GameAction, JewelKind, BUFFER_ROWS, MATCH_LEN,
};

/// Outcome of one [`BoardEngine::settle_and_clear`] run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettleReport {
    /// Gravity/match/clear cycles that removed jewels
    pub passes: usize,
    /// Jewels removed over all passes
    pub cleared: usize,
}

impl SettleReport {
    pub fn is_quiet(&self) -> bool {
        self.passes == 0
    }
}

/// Rules engine for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardEngine {
    board: Board,
    faller: Faller,
    game_over: bool,
}

impl BoardEngine {
    /// Create an engine with an empty board of `rows` playfield rows and `cols` columns
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        let board = Board::new(rows, cols)?;
        debug!(rows, cols, "board created");
        Ok(Self {
            board,
            faller: Faller::inactive(),
            game_over: false,
        })
    }

    /// Create an engine from preset playfield contents
    ///
    /// See [`Board::from_playfield`] for the line format. The preset is settled
    /// (gravity and cascades) before the engine is returned.
    pub fn with_contents(rows: usize, cols: usize, lines: &[&str]) -> Result<Self, EngineError> {
        let board = Board::from_playfield(rows, cols, lines)?;
        let mut engine = Self {
            board,
            faller: Faller::inactive(),
            game_over: false,
        };
        let report = engine.settle();
        debug!(
            rows,
            cols,
            passes = report.passes,
            cleared = report.cleared,
            "board created from contents"
        );
        Ok(engine)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> FallerStatus {
        self.faller.status
    }

    /// The active faller, if any
    pub fn faller(&self) -> Option<&Faller> {
        match self.faller.status {
            FallerStatus::None => None,
            FallerStatus::Falling | FallerStatus::Landed | FallerStatus::Frozen => {
                Some(&self.faller)
            }
        }
    }

    /// Latched game-over flag
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    fn ensure_playing(&self) -> Result<(), EngineError> {
        if self.game_over {
            return Err(EngineError::GameOver);
        }
        Ok(())
    }

    /// Place a new faller in column `column` with the given kinds, top to bottom
    ///
    /// The piece starts in the spawn buffer and immediately takes one descent step.
    /// A frozen faller is finalised and the board settled first.
    pub fn spawn_faller(
        &mut self,
        column: usize,
        top: JewelKind,
        mid: JewelKind,
        bot: JewelKind,
    ) -> Result<FallerStatus, EngineError> {
        self.spawn(FallerSpec::new(column, top, mid, bot))
    }

    pub fn spawn(&mut self, spec: FallerSpec) -> Result<FallerStatus, EngineError> {
        self.ensure_playing()?;
        match self.faller.status {
            FallerStatus::Falling | FallerStatus::Landed => return Err(EngineError::IllegalMove),
            FallerStatus::None | FallerStatus::Frozen => {}
        }
        if spec.column >= self.board.cols() {
            return Err(EngineError::InvalidColumn {
                column: spec.column,
                cols: self.board.cols(),
            });
        }

        match self.faller.status {
            FallerStatus::Frozen => {
                self.finalize_faller();
                self.settle();
            }
            FallerStatus::None | FallerStatus::Falling | FallerStatus::Landed => {}
        }
        if self.check_game_over() {
            return Err(EngineError::GameOver);
        }

        self.faller = Faller::spawned(spec);
        self.faller.write_to(&mut self.board);
        debug!(
            column = spec.column,
            top = %spec.kinds[0].as_char(),
            mid = %spec.kinds[1].as_char(),
            bot = %spec.kinds[2].as_char(),
            "faller spawned"
        );
        self.step_down();
        Ok(self.faller.status)
    }

    /// One descent step at the fall cadence
    ///
    /// - `Falling`/`Landed` and blocked below: `Falling` becomes `Landed`, `Landed` becomes `Frozen`.
    /// - `Falling`/`Landed` and free below: the piece moves down one row and its status is
    ///   recomputed, so landing is seen the moment it happens.
    /// - `Frozen`: the piece is finalised into ordinary grid content (status `None`).
    /// - `None`: nothing happens.
    pub fn advance_tick(&mut self) -> Result<FallerStatus, EngineError> {
        self.ensure_playing()?;
        trace!(status = self.faller.status.as_str(), "tick");
        match self.faller.status {
            FallerStatus::None => {}
            FallerStatus::Frozen => self.finalize_faller(),
            FallerStatus::Falling | FallerStatus::Landed => self.step_down(),
        }
        Ok(self.faller.status)
    }

    fn step_down(&mut self) {
        let f = self.faller;
        if self.board.is_blocked_below(f.bot_row(), f.column) {
            self.faller.status = match f.status {
                FallerStatus::Falling => FallerStatus::Landed,
                FallerStatus::Landed => FallerStatus::Frozen,
                FallerStatus::None | FallerStatus::Frozen => f.status,
            };
            match self.faller.status {
                FallerStatus::Landed => debug!(column = f.column, row = f.bot_row(), "faller landed"),
                FallerStatus::Frozen => debug!(column = f.column, row = f.bot_row(), "faller frozen"),
                FallerStatus::None | FallerStatus::Falling => {}
            }
            return;
        }

        self.board.set(f.top_row, f.column, None);
        self.faller.top_row += 1;
        self.faller.write_to(&mut self.board);
        self.faller.status = self.faller.support_status(&self.board);
        if self.faller.status == FallerStatus::Landed {
            debug!(column = f.column, row = self.faller.bot_row(), "faller landed");
        }
    }

    fn finalize_faller(&mut self) {
        debug!(
            column = self.faller.column,
            top_row = self.faller.top_row,
            "faller finalised"
        );
        self.faller.status = FallerStatus::None;
    }

    pub fn move_left(&mut self) -> Result<FallerStatus, EngineError> {
        self.shift(-1)
    }

    pub fn move_right(&mut self) -> Result<FallerStatus, EngineError> {
        self.shift(1)
    }

    /// Shift the faller one column; blocked or out-of-bounds leaves everything unchanged
    fn shift(&mut self, dx: isize) -> Result<FallerStatus, EngineError> {
        self.ensure_playing()?;
        if !self.faller.status.is_controllable() {
            return Err(EngineError::IllegalMove);
        }

        let f = self.faller;
        let column = f
            .column
            .checked_add_signed(dx)
            .filter(|&c| c < self.board.cols())
            .ok_or(EngineError::IllegalMove)?;
        let blocked = f
            .positions()
            .iter()
            .any(|pos| self.board.is_occupied(pos.row, column));
        if blocked {
            return Err(EngineError::IllegalMove);
        }

        f.erase_from(&mut self.board);
        self.faller.column = column;
        self.faller.write_to(&mut self.board);
        self.faller.status = self.faller.support_status(&self.board);
        trace!(column, status = self.faller.status.as_str(), "faller shifted");
        Ok(self.faller.status)
    }

    /// Cycle the faller's jewels: bottom to top, top to middle, middle to bottom
    pub fn rotate(&mut self) -> Result<FallerStatus, EngineError> {
        self.ensure_playing()?;
        if !self.faller.status.is_controllable() {
            return Err(EngineError::IllegalMove);
        }
        self.faller.rotate();
        self.faller.write_to(&mut self.board);
        Ok(self.faller.status)
    }

    /// Run gravity and clear matches until the board is quiescent
    ///
    /// Only valid once the faller is no longer controllable; a frozen faller is
    /// finalised first. Running it again on a quiescent board changes nothing.
    pub fn settle_and_clear(&mut self) -> Result<SettleReport, EngineError> {
        self.ensure_playing()?;
        match self.faller.status {
            FallerStatus::Falling | FallerStatus::Landed => return Err(EngineError::IllegalMove),
            FallerStatus::Frozen => self.finalize_faller(),
            FallerStatus::None => {}
        }
        Ok(self.settle())
    }

    fn settle(&mut self) -> SettleReport {
        // Every clearing pass removes at least MATCH_LEN jewels.
        let max_passes = self.board.cells().len() / MATCH_LEN + 1;
        let mut report = SettleReport::default();

        for _ in 0..max_passes {
            self.board.apply_gravity();
            let matches = find_matches(&self.board);
            if matches.is_empty() {
                break;
            }
            let cleared = self.board.clear_matches(&matches);
            report.passes += 1;
            report.cleared += cleared;
            debug!(pass = report.passes, cleared, "cascade pass");
        }
        report
    }

    /// True once the spawn buffer holds a jewel after the board has settled
    ///
    /// With no active faller this settles the board first and latches the result.
    /// While a faller is active the latched value is returned unchanged.
    pub fn check_game_over(&mut self) -> bool {
        if self.game_over {
            return true;
        }
        match self.faller.status {
            FallerStatus::None => {
                self.settle();
                if self.board.is_buffer_occupied() {
                    self.game_over = true;
                    debug!(jewels = self.board.jewel_count(), "game over");
                }
            }
            FallerStatus::Falling | FallerStatus::Landed | FallerStatus::Frozen => {}
        }
        self.game_over
    }

    /// Apply a driver command
    ///
    /// Returns `Ok(true)` if the command took effect and `Ok(false)` if it was
    /// rejected as an illegal move or column. Game over is returned as an error.
    pub fn apply(&mut self, action: GameAction) -> Result<bool, EngineError> {
        let result = match action {
            GameAction::Spawn(spec) => self.spawn(spec).map(|_| ()),
            GameAction::MoveLeft => self.move_left().map(|_| ()),
            GameAction::MoveRight => self.move_right().map(|_| ()),
            GameAction::Rotate => self.rotate().map(|_| ()),
            GameAction::Tick => self.advance_tick().map(|_| ()),
            GameAction::Settle => self.settle_and_clear().map(|_| ()),
        };
        match result {
            Ok(()) => Ok(true),
            Err(err) if err.is_recoverable() => {
                trace!(action = action.as_str(), %err, "command ignored");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Write a read-only view into an existing snapshot
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        out.buffer_rows = BUFFER_ROWS;
        out.cells.clear();
        out.cells.extend_from_slice(self.board.cells());
        out.status = self.faller.status;
        out.faller = self.faller().map(FallerSnapshot::from);
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Console rendering of the playfield with the faller marked
    pub fn render_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BoardEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faller = self.faller().copied();
        self.board.write_playfield(f, |pos| {
            faller.filter(|fl| fl.covers(pos)).map(|fl| fl.status)
        })
    }
}
