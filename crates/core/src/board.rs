//! Board module - manages the jewel grid
//!
//! The board is `playfield_rows + BUFFER_ROWS` rows by `cols` columns, stored as a
//! flat row-major vector. Coordinates are `(row, col)`: row 0 is the top of the
//! hidden spawn buffer, row `BUFFER_ROWS` is the first visible playfield row.
//! Dimensions are fixed at construction.

use std::fmt;

use crate::matching::MatchSet;
use crate::types::{
    Cell, EngineError, FallerStatus, JewelKind, Position, BUFFER_ROWS, MIN_COLS,
    MIN_PLAYFIELD_ROWS,
};

/// The jewel grid, spawn buffer included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    playfield_rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with `playfield_rows` visible rows
    pub fn new(playfield_rows: usize, cols: usize) -> Result<Self, EngineError> {
        if cols < MIN_COLS || playfield_rows < MIN_PLAYFIELD_ROWS {
            return Err(EngineError::InvalidDimensions {
                rows: playfield_rows,
                cols,
            });
        }
        Ok(Self {
            playfield_rows,
            cols,
            cells: vec![None; (playfield_rows + BUFFER_ROWS) * cols],
        })
    }

    /// Create a board whose playfield is given one string per row
    ///
    /// Each line must be exactly `cols` characters: a jewel letter, or a space or
    /// `.` for an empty cell. The buffer rows start empty. No gravity is applied.
    pub fn from_playfield(
        playfield_rows: usize,
        cols: usize,
        lines: &[&str],
    ) -> Result<Self, EngineError> {
        let mut board = Self::new(playfield_rows, cols)?;
        if lines.len() != playfield_rows {
            return Err(EngineError::InvalidDimensions {
                rows: lines.len(),
                cols,
            });
        }

        for (i, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(EngineError::InvalidContents { row: i });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    ' ' | '.' => None,
                    other => Some(
                        JewelKind::from_char(other).ok_or(EngineError::InvalidContents { row: i })?,
                    ),
                };
                board.set(BUFFER_ROWS + i, col, cell);
            }
        }
        Ok(board)
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows() || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Total rows, spawn buffer included
    pub fn rows(&self) -> usize {
        self.playfield_rows + BUFFER_ROWS
    }

    /// Visible rows
    pub fn playfield_rows(&self) -> usize {
        self.playfield_rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Index of the bottom row
    pub fn last_row(&self) -> usize {
        self.rows() - 1
    }

    /// Get cell at `(row, col)`, `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    pub fn get_at(&self, pos: Position) -> Option<Cell> {
        self.get(pos.row, pos.col)
    }

    /// Set cell at `(row, col)`, returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Within bounds and empty
    pub fn is_vacant(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Within bounds and holding a jewel
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// True when nothing can descend from `(row, col)`: the floor or a jewel is directly below
    pub fn is_blocked_below(&self, row: usize, col: usize) -> bool {
        row >= self.last_row() || self.is_occupied(row + 1, col)
    }

    /// One row of cells
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows() {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of jewels on the board
    pub fn jewel_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// True if any spawn-buffer cell holds a jewel
    pub fn is_buffer_occupied(&self) -> bool {
        self.cells[..BUFFER_ROWS * self.cols]
            .iter()
            .any(|cell| cell.is_some())
    }

    /// Let every loose jewel fall until nothing moves
    ///
    /// Each pass scans bottom-to-top and drops any jewel with an empty cell
    /// directly below by one row. Passes repeat until one moves nothing.
    /// Returns the total number of single-row moves.
    pub fn apply_gravity(&mut self) -> usize {
        let mut moves = 0;
        loop {
            let mut moved = false;
            for row in (0..self.last_row()).rev() {
                for col in 0..self.cols {
                    let above = row * self.cols + col;
                    let below = above + self.cols;
                    if self.cells[above].is_some() && self.cells[below].is_none() {
                        self.cells[below] = self.cells[above].take();
                        moved = true;
                        moves += 1;
                    }
                }
            }
            if !moved {
                return moves;
            }
        }
    }

    /// True if no jewel has an empty cell directly below it
    pub fn is_settled(&self) -> bool {
        (0..self.last_row()).all(|row| {
            (0..self.cols).all(|col| !(self.is_occupied(row, col) && self.is_vacant(row + 1, col)))
        })
    }

    /// Empty every matched cell, returns how many jewels were removed
    pub fn clear_matches(&mut self, matches: &MatchSet) -> usize {
        let mut cleared = 0;
        for pos in matches.iter() {
            if let Some(idx) = self.index(pos.row, pos.col) {
                if self.cells[idx].take().is_some() {
                    cleared += 1;
                }
            }
        }
        cleared
    }

    /// Write the console rendering of the playfield
    ///
    /// `faller_at` reports the faller status for cells the faller occupies.
    pub(crate) fn write_playfield(
        &self,
        f: &mut impl fmt::Write,
        faller_at: impl Fn(Position) -> Option<FallerStatus>,
    ) -> fmt::Result {
        for row in BUFFER_ROWS..self.rows() {
            f.write_char('|')?;
            for col in 0..self.cols {
                let pos = Position::new(row, col);
                match (self.get(row, col).flatten(), faller_at(pos)) {
                    (None, _) => f.write_str("   ")?,
                    (Some(kind), Some(FallerStatus::Falling)) => {
                        write!(f, "[{}]", kind.as_char())?
                    }
                    (Some(kind), Some(FallerStatus::Landed)) => {
                        write!(f, "|{}|", kind.as_char())?
                    }
                    (Some(kind), Some(FallerStatus::Frozen | FallerStatus::None) | None) => {
                        write!(f, " {} ", kind.as_char())?
                    }
                }
            }
            f.write_str("|\n")?;
        }
        f.write_char(' ')?;
        for _ in 0..self.cols {
            f.write_str("---")?;
        }
        f.write_str(" \n")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_playfield(f, |_| None)
    }
}
