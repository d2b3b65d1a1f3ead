//! Driver commands and the line-oriented command syntax.

use derive_more::{Display, Error};

use crate::JewelKind;

/// A faller to spawn: 0-based column and kinds ordered top, middle, bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FallerSpec {
    pub column: usize,
    pub kinds: [JewelKind; 3],
}

impl FallerSpec {
    pub fn new(column: usize, top: JewelKind, mid: JewelKind, bot: JewelKind) -> Self {
        Self {
            column,
            kinds: [top, mid, bot],
        }
    }
}

/// Commands a driver issues to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Place a new faller in the spawn buffer
    Spawn(FallerSpec),
    /// Shift the faller one column left
    MoveLeft,
    /// Shift the faller one column right
    MoveRight,
    /// Cycle the faller's jewels downward
    Rotate,
    /// One descent step
    Tick,
    /// Gravity and match cascade after a faller finalises
    Settle,
}

/// Result of parsing one command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedLine {
    Action(GameAction),
    Quit,
}

/// A command line that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("cannot parse command {line:?}: {reason}")]
pub struct ParseActionError {
    pub line: String,
    pub reason: &'static str,
}

impl ParseActionError {
    fn new(line: &str, reason: &'static str) -> Self {
        Self {
            line: line.to_string(),
            reason,
        }
    }
}

impl GameAction {
    /// Parse one line of the console command syntax
    ///
    /// - `F <col> <top> <mid> <bot>`: spawn, `col` is 1-based
    /// - `<` / `>`: move left / right
    /// - `R`: rotate
    /// - empty line: tick
    /// - `S`: settle
    /// - `Q`: quit
    ///
    /// # Examples
    ///
    /// ```
    /// use columns_types::{GameAction, ParsedLine};
    ///
    /// assert_eq!(GameAction::parse(""), Ok(ParsedLine::Action(GameAction::Tick)));
    /// assert_eq!(GameAction::parse(">"), Ok(ParsedLine::Action(GameAction::MoveRight)));
    /// assert_eq!(GameAction::parse("q"), Ok(ParsedLine::Quit));
    /// assert!(GameAction::parse("F 0 S S S").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<ParsedLine, ParseActionError> {
        let trimmed = line.trim();
        let mut parts = trimmed.split_whitespace();
        let Some(head) = parts.next() else {
            return Ok(ParsedLine::Action(GameAction::Tick));
        };

        let action = match head {
            "<" => GameAction::MoveLeft,
            ">" => GameAction::MoveRight,
            "R" | "r" => GameAction::Rotate,
            "S" | "s" => GameAction::Settle,
            "Q" | "q" => return Ok(ParsedLine::Quit),
            "F" | "f" => {
                let column = parts
                    .next()
                    .and_then(|c| c.parse::<usize>().ok())
                    .filter(|&c| c >= 1)
                    .ok_or_else(|| ParseActionError::new(trimmed, "expected a 1-based column"))?;
                let mut kinds = [JewelKind::S; 3];
                for kind in &mut kinds {
                    *kind = parts
                        .next()
                        .and_then(JewelKind::from_str)
                        .ok_or_else(|| ParseActionError::new(trimmed, "expected a jewel letter"))?;
                }
                GameAction::Spawn(FallerSpec {
                    column: column - 1,
                    kinds,
                })
            }
            _ => return Err(ParseActionError::new(trimmed, "unknown command")),
        };

        if parts.next().is_some() {
            return Err(ParseActionError::new(trimmed, "trailing input"));
        }
        Ok(ParsedLine::Action(action))
    }

    /// Short name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Spawn(_) => "spawn",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::Rotate => "rotate",
            GameAction::Tick => "tick",
            GameAction::Settle => "settle",
        }
    }
}
