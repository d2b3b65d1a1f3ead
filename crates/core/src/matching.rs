//! Match detection - finds runs of identical jewels in the playfield
//!
//! A run is `MATCH_LEN` or more identical jewels along a row, a column, the
//! downward diagonal or the upward diagonal. Only playfield cells (rows at or
//! below `BUFFER_ROWS`) take part. Every window of `MATCH_LEN` cells is tested,
//! so longer runs and crossing runs are covered without special cases.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Position, BUFFER_ROWS, MATCH_LEN};

/// Row and column step for each scan axis
const AXES: [(isize, isize); 4] = [
    // Row
    (0, 1),
    // Column
    (1, 0),
    // Downward diagonal
    (1, 1),
    // Upward diagonal
    (-1, 1),
];

/// Coordinates that belong to at least one run, sorted row-major, no duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    positions: Vec<Position>,
}

impl MatchSet {
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.positions.binary_search(&pos).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions.iter().copied()
    }

    pub fn as_slice(&self) -> &[Position] {
        &self.positions
    }
}

/// Cells of the window starting at `start` along `(dr, dc)`, if it fits in the playfield
fn window(
    board: &Board,
    start: Position,
    (dr, dc): (isize, isize),
) -> Option<ArrayVec<Position, MATCH_LEN>> {
    let mut cells = ArrayVec::new();
    for step in 0..MATCH_LEN as isize {
        let row = start.row.checked_add_signed(dr * step)?;
        let col = start.col.checked_add_signed(dc * step)?;
        if row < BUFFER_ROWS || row >= board.rows() || col >= board.cols() {
            return None;
        }
        cells.push(Position::new(row, col));
    }
    Some(cells)
}

/// Scan the playfield and collect every jewel that is part of a run
pub fn find_matches(board: &Board) -> MatchSet {
    let cols = board.cols();
    let mut marked = vec![false; board.rows() * cols];

    for row in BUFFER_ROWS..board.rows() {
        for col in 0..cols {
            let start = Position::new(row, col);
            let Some(Some(kind)) = board.get_at(start) else {
                continue;
            };
            for axis in AXES {
                let Some(cells) = window(board, start, axis) else {
                    continue;
                };
                if cells
                    .iter()
                    .all(|&pos| board.get_at(pos) == Some(Some(kind)))
                {
                    for pos in cells {
                        marked[pos.row * cols + pos.col] = true;
                    }
                }
            }
        }
    }

    let positions = marked
        .iter()
        .enumerate()
        .filter(|(_, hit)| **hit)
        .map(|(idx, _)| Position::new(idx / cols, idx % cols))
        .collect();
    MatchSet { positions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::JewelKind;

    fn board(lines: &[&str]) -> Board {
        Board::from_playfield(lines.len(), lines[0].len(), lines).unwrap()
    }

    #[test]
    fn test_empty_board_has_no_matches() {
        let b = Board::new(4, 3).unwrap();
        assert!(find_matches(&b).is_empty());
    }

    #[test]
    fn test_horizontal_run() {
        let b = board(&["    ", "    ", "    ", "XXXT"]);
        let m = find_matches(&b);
        assert_eq!(
            m.as_slice(),
            &[Position::new(6, 0), Position::new(6, 1), Position::new(6, 2)]
        );
    }

    #[test]
    fn test_vertical_run_of_four() {
        let b = board(&["S  ", "S  ", "S  ", "S  "]);
        let m = find_matches(&b);
        assert_eq!(m.len(), 4);
        for row in 3..7 {
            assert!(m.contains(Position::new(row, 0)));
        }
    }

    #[test]
    fn test_diagonal_runs() {
        let down = board(&["W   ", " W  ", "  W ", "   T"]);
        let m = find_matches(&down);
        assert_eq!(
            m.as_slice(),
            &[Position::new(3, 0), Position::new(4, 1), Position::new(5, 2)]
        );

        let up = board(&["    ", "  Y ", " Y  ", "Y   "]);
        let m = find_matches(&up);
        assert_eq!(
            m.as_slice(),
            &[Position::new(4, 2), Position::new(5, 1), Position::new(6, 0)]
        );
    }

    #[test]
    fn test_crossing_runs_share_a_cell() {
        let b = board(&["   ", " Z ", " Z ", "ZZZ"]);
        let m = find_matches(&b);
        assert_eq!(m.len(), 5);
        assert!(m.contains(Position::new(6, 1)));
    }

    #[test]
    fn test_buffer_rows_are_ignored() {
        let mut b = Board::new(4, 3).unwrap();
        for col in 0..3 {
            b.set(0, col, Some(JewelKind::S));
        }
        b.set(1, 0, Some(JewelKind::T));
        b.set(2, 0, Some(JewelKind::T));
        b.set(3, 0, Some(JewelKind::T));
        assert!(find_matches(&b).is_empty());
    }

    #[test]
    fn test_mixed_kinds_do_not_match() {
        let b = board(&["   ", "   ", "   ", "STS"]);
        assert!(find_matches(&b).is_empty());
    }
}
