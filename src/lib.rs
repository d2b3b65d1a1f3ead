//! Columns (workspace facade crate).
//!
//! Re-exports the workspace crates as `columns::{core,input,term,types}` and
//! holds the pieces shared by the two binaries: command-line arguments, the
//! driver [`session::Session`] and the headless [`script::run_script`] loop.

pub use columns_core as core;
pub use columns_input as input;
pub use columns_term as term;
pub use columns_types as types;

pub mod cli;
pub mod script;
pub mod session;
