//! Engine error taxonomy.

use derive_more::{Display, Error};

/// Errors returned by the board engine
///
/// - Construction: `InvalidDimensions`, `InvalidContents`
/// - Rejected input, state unchanged: `InvalidColumn`, `IllegalMove`
/// - End of play: `GameOver`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Board needs at least 3 columns and 4 playfield rows
    #[display("invalid board dimensions: {rows} rows x {cols} columns")]
    InvalidDimensions { rows: usize, cols: usize },
    /// A preset playfield row has the wrong width or an unknown jewel letter
    #[display("invalid preset contents in playfield row {row}")]
    InvalidContents { row: usize },
    /// Spawn column outside `[0, cols)`
    #[display("column {column} is outside the board (0..{cols})")]
    InvalidColumn { column: usize, cols: usize },
    /// Blocked or out-of-bounds move, or a command that does not apply to the current faller
    #[display("illegal move")]
    IllegalMove,
    /// The spawn buffer was occupied at quiescence
    #[display("game over")]
    GameOver,
}

impl EngineError {
    /// True for rejected input that the driver may simply ignore
    pub fn is_recoverable(&self) -> bool {
        match self {
            EngineError::InvalidColumn { .. } | EngineError::IllegalMove => true,
            EngineError::InvalidDimensions { .. }
            | EngineError::InvalidContents { .. }
            | EngineError::GameOver => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recoverable_errors_are_input_mistakes() {
        assert!(EngineError::IllegalMove.is_recoverable());
        assert!(EngineError::InvalidColumn { column: 9, cols: 6 }.is_recoverable());
        assert!(!EngineError::GameOver.is_recoverable());
        assert!(!EngineError::InvalidDimensions { rows: 2, cols: 2 }.is_recoverable());
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            EngineError::InvalidDimensions { rows: 3, cols: 6 }.to_string(),
            "invalid board dimensions: 3 rows x 6 columns"
        );
        assert_eq!(
            EngineError::InvalidColumn { column: 7, cols: 6 }.to_string(),
            "column 7 is outside the board (0..6)"
        );
        assert_eq!(EngineError::GameOver.to_string(), "game over");
    }
}
