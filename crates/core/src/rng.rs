//! RNG module - random fallers for the drivers
//!
//! The engine itself is deterministic and never draws random numbers. Drivers
//! use [`FallerRng`] to pick the next faller: a column whose first playfield row
//! is still empty, and three independent kinds.

use crate::board::Board;
use crate::types::{FallerSpec, JewelKind, BUFFER_ROWS};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low bits of an LCG cycle with a short period; use the high half.
        (((self.next_u32() >> 16) as u64 * max as u64) >> 16) as u32
    }
}

/// Source of random fallers
#[derive(Debug, Clone)]
pub struct FallerRng {
    rng: SimpleRng,
}

impl FallerRng {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    pub fn next_kind(&mut self) -> JewelKind {
        JewelKind::ALL[self.rng.next_range(JewelKind::ALL.len() as u32) as usize]
    }

    /// Pick the next faller for `board`
    ///
    /// Returns `None` when the first playfield row is full, so no column can
    /// take a piece.
    pub fn next_spec(&mut self, board: &Board) -> Option<FallerSpec> {
        let open: Vec<usize> = (0..board.cols())
            .filter(|&col| board.is_vacant(BUFFER_ROWS, col))
            .collect();
        if open.is_empty() {
            return None;
        }
        let column = open[self.rng.next_range(open.len() as u32) as usize];
        Some(FallerSpec {
            column,
            kinds: [self.next_kind(), self.next_kind(), self.next_kind()],
        })
    }

    /// A faller in any column, for when no column is open
    pub fn spec_in_any_column(&mut self, cols: usize) -> FallerSpec {
        let column = self.rng.next_range(cols as u32) as usize;
        FallerSpec {
            column,
            kinds: [self.next_kind(), self.next_kind(), self.next_kind()],
        }
    }
}
