//! Property tests for the rules engine.
//!
//! Invariants covered:
//! - After settling, no jewel hangs over an empty cell and no run remains.
//! - Rotating three times restores the faller.
//! - Moving right then left restores the faller and the board.
//! - A faller over open space lands after exactly `last_row - bottom_row` ticks.
//! - Game over holds exactly when the settled board has a jewel in the buffer.

use proptest::prelude::*;

use columns::core::{find_matches, BoardEngine};
use columns::types::{EngineError, FallerSpec, FallerStatus, JewelKind};

fn kind_strategy() -> impl Strategy<Value = JewelKind> {
    (0..JewelKind::ALL.len()).prop_map(|i| JewelKind::ALL[i])
}

fn kinds_strategy() -> impl Strategy<Value = [JewelKind; 3]> {
    (kind_strategy(), kind_strategy(), kind_strategy()).prop_map(|(a, b, c)| [a, b, c])
}

/// Playfield lines for a `rows` x `cols` board; index 6 (of 0..=6) means empty.
fn lines_from(rows: usize, cols: usize, raw: &[usize]) -> Vec<String> {
    (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| match JewelKind::ALL.get(raw[r * cols + c]) {
                    Some(kind) => kind.as_char(),
                    None => '.',
                })
                .collect()
        })
        .collect()
}

fn run_until_finalised(engine: &mut BoardEngine) {
    while engine.status() != FallerStatus::None {
        engine.advance_tick().unwrap();
    }
}

proptest! {
    #[test]
    fn settled_presets_have_no_gaps_and_no_runs(
        rows in 4usize..=8,
        cols in 3usize..=8,
        raw in prop::collection::vec(0usize..=6, 64),
    ) {
        let lines = lines_from(rows, cols, &raw);
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let mut engine = BoardEngine::with_contents(rows, cols, &refs).unwrap();

        prop_assert!(engine.board().is_settled());
        prop_assert!(find_matches(engine.board()).is_empty());

        // Already quiescent: settling again changes nothing.
        let before = engine.board().clone();
        let report = engine.settle_and_clear().unwrap();
        prop_assert!(report.is_quiet());
        prop_assert_eq!(engine.board(), &before);
    }

    #[test]
    fn rotating_three_times_is_identity(
        col in 0usize..6,
        kinds in kinds_strategy(),
        ticks in 0usize..12,
    ) {
        let mut engine = BoardEngine::new(13, 6).unwrap();
        engine.spawn(FallerSpec { column: col, kinds }).unwrap();
        for _ in 0..ticks {
            engine.advance_tick().unwrap();
        }
        let before = engine.snapshot();

        for _ in 0..3 {
            engine.rotate().unwrap();
        }
        prop_assert_eq!(engine.faller().map(|f| f.kinds), Some(kinds));
        prop_assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn right_then_left_returns_to_start(
        col in 0usize..5,
        kinds in kinds_strategy(),
        ticks in 0usize..12,
    ) {
        let mut engine = BoardEngine::new(13, 6).unwrap();
        engine.spawn(FallerSpec { column: col, kinds }).unwrap();
        for _ in 0..ticks {
            engine.advance_tick().unwrap();
        }
        let before = engine.snapshot();

        engine.move_right().unwrap();
        prop_assert_eq!(engine.faller().map(|f| f.column), Some(col + 1));
        engine.move_left().unwrap();
        prop_assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn lands_after_distance_to_floor_ticks(
        rows in 4usize..=20,
        cols in 3usize..=8,
        col_seed in any::<usize>(),
        kinds in kinds_strategy(),
    ) {
        let col = col_seed % cols;
        let mut engine = BoardEngine::new(rows, cols).unwrap();
        engine.spawn(FallerSpec { column: col, kinds }).unwrap();
        let start = engine.faller().unwrap().bot_row();
        let last = engine.board().last_row();

        let mut ticks = 0;
        while engine.status() == FallerStatus::Falling {
            engine.advance_tick().unwrap();
            ticks += 1;
        }
        prop_assert_eq!(engine.status(), FallerStatus::Landed);
        prop_assert_eq!(ticks, last - start);
    }

    #[test]
    fn game_over_iff_buffer_occupied_after_settle(
        drops in prop::collection::vec((0usize..4, kinds_strategy()), 1..40),
    ) {
        let mut engine = BoardEngine::new(4, 4).unwrap();

        for (column, kinds) in drops {
            match engine.spawn(FallerSpec { column, kinds }) {
                Ok(_) => {}
                Err(EngineError::GameOver) => {
                    prop_assert!(engine.is_game_over());
                    prop_assert!(engine.board().is_buffer_occupied());
                    break;
                }
                Err(err) => return Err(TestCaseError::fail(format!("spawn failed: {err}"))),
            }
            run_until_finalised(&mut engine);
            engine.settle_and_clear().unwrap();
            prop_assert!(find_matches(engine.board()).is_empty());

            let over = engine.check_game_over();
            prop_assert_eq!(over, engine.board().is_buffer_occupied());
            if over {
                break;
            }
        }
    }
}
