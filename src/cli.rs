//! Command-line arguments shared by the binaries, and logging setup.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use clap::Args;
use tracing_subscriber::EnvFilter;

use crate::types::{DEFAULT_COLS, DEFAULT_PLAYFIELD_ROWS};

/// Board size
#[derive(Debug, Clone, Args)]
pub struct BoardArgs {
    /// Visible playfield rows
    #[arg(long, default_value_t = DEFAULT_PLAYFIELD_ROWS)]
    pub rows: usize,
    /// Columns
    #[arg(long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,
}

/// Logging destination
#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    /// Write tracing output to this file (filter with RUST_LOG, default `columns=info`)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl LogArgs {
    /// Install the global subscriber; without `--log-file` nothing is recorded.
    pub fn init(&self) -> Result<()> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("columns=info"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init()
            .map_err(|e| anyhow!(e))?;
        Ok(())
    }
}
