//! Headless Columns driver.
//!
//! Reads one command per line from stdin and prints the playfield after each:
//!
//! ```text
//! F 3 S T X     spawn a faller in column 3 (1-based), top to bottom
//! <  >  R       move left, move right, rotate
//! (empty)       one tick
//! S             settle
//! Q             quit
//! ```
//!
//! Whenever the faller finalises the board is settled and checked for game over.

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use columns::cli::{BoardArgs, LogArgs};
use columns::core::BoardEngine;
use columns::script::run_script;

/// Apply line commands from stdin to a Columns board
#[derive(Debug, Parser)]
#[command(name = "columns-script", version)]
struct Cli {
    #[command(flatten)]
    board: BoardArgs,
    /// Preset playfield: one line per row, `cols` characters each (space or `.` is empty)
    #[arg(long)]
    contents: Option<PathBuf>,
    #[command(flatten)]
    log: LogArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.log.init()?;

    let mut engine = match &cli.contents {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("cannot read {}", path.display()))?;
            let lines: Vec<&str> = text.lines().collect();
            BoardEngine::with_contents(cli.board.rows, cli.board.cols, &lines)?
        }
        None => BoardEngine::new(cli.board.rows, cli.board.cols)?,
    };

    run_script(&mut engine, io::stdin().lock(), io::stdout().lock(), io::stderr())?;
    Ok(())
}
