//! Terminal presentation for the jewel puzzle.
//!
//! Rendering is split in two:
//! - [`GameView`] turns a [`crate::core::GameSnapshot`] into a [`FrameBuffer`] (pure, testable)
//! - [`TerminalRenderer`] flushes a framebuffer to the terminal with `crossterm`

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use columns_core as core;
pub use columns_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
