//! Core rules module - pure, deterministic, and testable
//!
//! This crate contains the whole rules engine for the falling-jewel puzzle. It
//! has no dependencies on terminals, timers, or I/O, making it:
//!
//! - **Deterministic**: the same command sequence always yields the same board
//! - **Testable**: every transition is a plain method call
//! - **Portable**: any driver (terminal, headless script, GUI) can sit on top
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with the hidden spawn buffer, gravity, and clearing
//! - [`faller`]: the three-jewel piece, its position and rotation
//! - [`matching`]: run detection along rows, columns, and both diagonals
//! - [`engine`]: [`BoardEngine`], the piece lifecycle and cascade state machine
//! - [`snapshot`]: read-only views for renderers
//! - [`rng`]: seeded random fallers for drivers
//!
//! # Example
//!
//! ```
//! use columns_core::BoardEngine;
//! use columns_types::{FallerStatus, JewelKind};
//!
//! let mut engine = BoardEngine::new(13, 6).unwrap();
//! engine
//!     .spawn_faller(2, JewelKind::S, JewelKind::S, JewelKind::T)
//!     .unwrap();
//!
//! while engine.status() != FallerStatus::None {
//!     engine.advance_tick().unwrap();
//! }
//! engine.settle_and_clear().unwrap();
//! assert!(!engine.check_game_over());
//! assert_eq!(engine.board().get(15, 2), Some(Some(JewelKind::T)));
//! ```

pub mod board;
pub mod engine;
pub mod faller;
pub mod matching;
pub mod rng;
pub mod snapshot;

pub use columns_types as types;

pub use board::Board;
pub use engine::{BoardEngine, SettleReport};
pub use faller::Faller;
pub use matching::{find_matches, MatchSet};
pub use rng::{FallerRng, SimpleRng};
pub use snapshot::{FallerSnapshot, GameSnapshot};
