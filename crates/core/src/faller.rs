//! The controlled three-jewel piece.

use crate::board::Board;
use crate::types::{FallerSpec, FallerStatus, JewelKind, Position};

/// Active falling piece
///
/// Three jewels stacked in one column. `kinds` is ordered top, middle, bottom and
/// the rows are `top_row`, `top_row + 1`, `top_row + 2`. The row and column are
/// tracked here rather than found by scanning the grid. While `status` is not
/// `None` the three cells on the board hold exactly these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Faller {
    pub status: FallerStatus,
    pub column: usize,
    pub top_row: usize,
    pub kinds: [JewelKind; 3],
}

impl Faller {
    /// A new faller occupying the three spawn-buffer rows
    pub fn spawned(spec: FallerSpec) -> Self {
        Self {
            status: FallerStatus::Falling,
            column: spec.column,
            top_row: 0,
            kinds: spec.kinds,
        }
    }

    /// Placeholder held while no piece is active
    pub fn inactive() -> Self {
        Self {
            status: FallerStatus::None,
            column: 0,
            top_row: 0,
            kinds: [JewelKind::S; 3],
        }
    }

    pub fn mid_row(&self) -> usize {
        self.top_row + 1
    }

    pub fn bot_row(&self) -> usize {
        self.top_row + 2
    }

    /// Cells covered, top to bottom
    pub fn positions(&self) -> [Position; 3] {
        [
            Position::new(self.top_row, self.column),
            Position::new(self.mid_row(), self.column),
            Position::new(self.bot_row(), self.column),
        ]
    }

    pub fn top(&self) -> Position {
        Position::new(self.top_row, self.column)
    }

    pub fn mid(&self) -> Position {
        Position::new(self.mid_row(), self.column)
    }

    pub fn bot(&self) -> Position {
        Position::new(self.bot_row(), self.column)
    }

    pub fn covers(&self, pos: Position) -> bool {
        pos.col == self.column && (self.top_row..=self.bot_row()).contains(&pos.row)
    }

    /// Cycle the kinds: the bottom jewel moves to the top, the others move down one
    pub fn rotate(&mut self) {
        self.kinds.rotate_right(1);
    }

    /// `Landed` if the bottom jewel is on the floor or on a jewel, else `Falling`
    pub fn support_status(&self, board: &Board) -> FallerStatus {
        if board.is_blocked_below(self.bot_row(), self.column) {
            FallerStatus::Landed
        } else {
            FallerStatus::Falling
        }
    }

    /// Copy the three jewels onto the board
    pub(crate) fn write_to(&self, board: &mut Board) {
        for (pos, kind) in self.positions().into_iter().zip(self.kinds) {
            board.set(pos.row, pos.col, Some(kind));
        }
    }

    /// Empty the three cells the faller covers
    pub(crate) fn erase_from(&self, board: &mut Board) {
        for pos in self.positions() {
            board.set(pos.row, pos.col, None);
        }
    }
}
