//! Session tests - idle fall driving the engine with random fallers

use columns::core::BoardEngine;
use columns::session::{FallOutcome, Session};
use columns::types::{FallerStatus, GameAction};

#[test]
fn test_first_step_spawns_a_faller() {
    let mut session = Session::new(13, 6, 7).unwrap();
    assert_eq!(
        session.fall_step(),
        Ok(FallOutcome::Spawned { cleared: 0 })
    );
    assert_eq!(session.engine().status(), FallerStatus::Falling);
    assert_eq!(session.engine().board().jewel_count(), 3);
}

#[test]
fn test_steps_tick_the_faller_down() {
    let mut session = Session::new(13, 6, 7).unwrap();
    session.fall_step().unwrap();
    let row = session.engine().faller().unwrap().top_row;

    assert_eq!(
        session.fall_step(),
        Ok(FallOutcome::Ticked(FallerStatus::Falling))
    );
    assert_eq!(session.engine().faller().unwrap().top_row, row + 1);
}

#[test]
fn test_handle_ignores_illegal_commands() {
    let mut session = Session::new(13, 6, 7).unwrap();
    // Nothing to rotate yet.
    assert!(!session.handle(GameAction::Rotate));
    session.fall_step().unwrap();
    assert!(session.handle(GameAction::Rotate));
}

#[test]
fn test_idle_play_reaches_game_over() {
    let mut session = Session::new(4, 3, 11).unwrap();
    let mut steps = 0;
    loop {
        match session.fall_step().unwrap() {
            FallOutcome::GameOver => break,
            FallOutcome::Ticked(_) | FallOutcome::Spawned { .. } => {}
        }
        steps += 1;
        assert!(steps < 10_000, "game never ended");
    }
    assert!(session.is_game_over());
    assert!(session.engine().board().is_buffer_occupied());
    assert!(!session.handle(GameAction::MoveLeft));
}

#[test]
fn test_session_from_preset_engine() {
    let engine = BoardEngine::with_contents(4, 3, &["...", "...", "...", "STW"]).unwrap();
    let mut session = Session::from_engine(engine, 3);
    session.fall_step().unwrap();
    assert_eq!(session.engine().board().jewel_count(), 6);
}
