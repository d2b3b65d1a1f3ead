//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events to [`crate::types::GameAction`]s. Ticks and
//! spawns come from the driver's clock, not from keys.

pub mod map;

pub use columns_types as types;

pub use map::{handle_key_event, should_quit};
