//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no I/O, making them usable in any
//! context (rules engine, terminal driver, headless script driver).
//!
//! # Board Dimensions
//!
//! A board is `playfield_rows + BUFFER_ROWS` rows by `cols` columns. Row 0 is the
//! top of the hidden spawn buffer; row `BUFFER_ROWS` is the first visible row.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BUFFER_ROWS` | 3 | Hidden rows above the playfield |
//! | `MIN_COLS` | 3 | Narrowest legal board |
//! | `MIN_PLAYFIELD_ROWS` | 4 | Shortest legal playfield |
//! | `DEFAULT_PLAYFIELD_ROWS` | 13 | Playfield height used by the drivers |
//! | `DEFAULT_COLS` | 6 | Board width used by the drivers |
//! | `MATCH_LEN` | 3 | Shortest run that clears |
//!
//! # Driver Timing
//!
//! The engine has no clock. The drivers run at `FRAME_MS` per frame and call
//! `advance_tick` once every `FRAMES_PER_FALL` frames.
//!
//! # Examples
//!
//! ```
//! use columns_types::{GameAction, JewelKind, ParsedLine};
//!
//! assert_eq!(JewelKind::from_char('x'), Some(JewelKind::X));
//! assert_eq!(JewelKind::W.as_char(), 'W');
//!
//! let line = GameAction::parse("F 2 S T X").unwrap();
//! match line {
//!     ParsedLine::Action(GameAction::Spawn(spec)) => {
//!         assert_eq!(spec.column, 1);
//!         assert_eq!(spec.kinds, [JewelKind::S, JewelKind::T, JewelKind::X]);
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

mod action;
mod error;

pub use action::{FallerSpec, GameAction, ParseActionError, ParsedLine};
pub use error::EngineError;

use serde::Serialize;

/// Hidden spawn-buffer rows above the visible playfield
pub const BUFFER_ROWS: usize = 3;

/// Minimum number of columns accepted by the engine
pub const MIN_COLS: usize = 3;

/// Minimum number of visible playfield rows accepted by the engine
pub const MIN_PLAYFIELD_ROWS: usize = 4;

/// Playfield rows used by the drivers when none are given
pub const DEFAULT_PLAYFIELD_ROWS: usize = 13;

/// Columns used by the drivers when none are given
pub const DEFAULT_COLS: usize = 6;

/// Length of the shortest run of identical jewels that is cleared
pub const MATCH_LEN: usize = 3;

/// Driver frame interval in milliseconds (10 frames per second)
pub const FRAME_MS: u64 = 100;

/// Frames between two idle descent ticks
pub const FRAMES_PER_FALL: u32 = 10;

/// The six jewel kinds
///
/// Each kind is identified by a single letter. The mapping from kind to a
/// presentation color belongs to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum JewelKind {
    S,
    T,
    W,
    X,
    Y,
    Z,
}

impl JewelKind {
    /// All kinds, in letter order
    pub const ALL: [JewelKind; 6] = [
        JewelKind::S,
        JewelKind::T,
        JewelKind::W,
        JewelKind::X,
        JewelKind::Y,
        JewelKind::Z,
    ];

    /// Parse a kind from its letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use columns_types::JewelKind;
    ///
    /// assert_eq!(JewelKind::from_char('S'), Some(JewelKind::S));
    /// assert_eq!(JewelKind::from_char('z'), Some(JewelKind::Z));
    /// assert_eq!(JewelKind::from_char('A'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'S' => Some(JewelKind::S),
            'T' => Some(JewelKind::T),
            'W' => Some(JewelKind::W),
            'X' => Some(JewelKind::X),
            'Y' => Some(JewelKind::Y),
            'Z' => Some(JewelKind::Z),
            _ => None,
        }
    }

    /// Parse a kind from a one-letter string
    pub fn from_str(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    /// Uppercase letter for this kind
    pub fn as_char(&self) -> char {
        match self {
            JewelKind::S => 'S',
            JewelKind::T => 'T',
            JewelKind::W => 'W',
            JewelKind::X => 'X',
            JewelKind::Y => 'Y',
            JewelKind::Z => 'Z',
        }
    }
}

/// A cell on the board
///
/// - `None`: Empty cell
/// - `Some(JewelKind)`: Cell holding a jewel of that kind
pub type Cell = Option<JewelKind>;

/// Lifecycle of the controlled piece
///
/// - **None**: no active faller
/// - **Falling**: descending freely, accepts movement and rotation
/// - **Landed**: resting on the floor or a jewel, still accepts movement and rotation
/// - **Frozen**: settled and uncontrollable, finalised by the next tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FallerStatus {
    #[default]
    None,
    Falling,
    Landed,
    Frozen,
}

impl FallerStatus {
    /// True while the player can still move or rotate the faller
    pub fn is_controllable(&self) -> bool {
        match self {
            FallerStatus::Falling | FallerStatus::Landed => true,
            FallerStatus::None | FallerStatus::Frozen => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FallerStatus::None => "none",
            FallerStatus::Falling => "falling",
            FallerStatus::Landed => "landed",
            FallerStatus::Frozen => "frozen",
        }
    }
}

/// A board coordinate, row-major: `row` 0 is the top of the spawn buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}
