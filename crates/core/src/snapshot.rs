use serde::Serialize;

use crate::faller::Faller;
use crate::types::{Cell, FallerStatus, JewelKind, Position};

/// Read-only view of the active faller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FallerSnapshot {
    pub status: FallerStatus,
    pub column: usize,
    /// Top, middle and bottom rows
    pub rows: [usize; 3],
    /// Top, middle and bottom kinds
    pub kinds: [JewelKind; 3],
}

impl FallerSnapshot {
    pub fn positions(&self) -> [Position; 3] {
        self.rows.map(|row| Position::new(row, self.column))
    }

    pub fn covers(&self, pos: Position) -> bool {
        pos.col == self.column && self.rows.contains(&pos.row)
    }
}

impl From<&Faller> for FallerSnapshot {
    fn from(value: &Faller) -> Self {
        Self {
            status: value.status,
            column: value.column,
            rows: [value.top_row, value.mid_row(), value.bot_row()],
            kinds: value.kinds,
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GameSnapshot {
    /// Total rows, spawn buffer included
    pub rows: usize,
    pub cols: usize,
    pub buffer_rows: usize,
    /// Row-major cells, `rows * cols` long
    pub cells: Vec<Cell>,
    pub status: FallerStatus,
    pub faller: Option<FallerSnapshot>,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col).copied()
    }

    /// Visible rows only
    pub fn playfield_rows(&self) -> usize {
        self.rows.saturating_sub(self.buffer_rows)
    }

    /// Faller status if the faller covers `pos`
    pub fn faller_at(&self, pos: Position) -> Option<FallerStatus> {
        self.faller
            .filter(|f| f.covers(pos))
            .map(|f| f.status)
    }
}
