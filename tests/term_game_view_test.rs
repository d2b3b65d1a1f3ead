use columns::core::BoardEngine;
use columns::term::{game_view::jewel_color, GameView, Viewport};
use columns::types::JewelKind;

#[test]
fn term_view_renders_border_corners() {
    let snap = BoardEngine::new(13, 6).unwrap().snapshot();
    let view = GameView::default();

    // With cell_w=2: 6*2 by 13 => 12x13, plus border => 14x15
    let fb = view.render(&snap, Viewport::new(14, 15));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(13, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 14).unwrap().ch, '└');
    assert_eq!(fb.get(13, 14).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_settled_jewel_as_two_chars_wide() {
    let mut lines = vec!["......"; 12];
    lines.push("Z.....");
    let snap = BoardEngine::with_contents(13, 6, &lines).unwrap().snapshot();

    let fb = GameView::default().render(&snap, Viewport::new(14, 15));

    // Inside border: (1,1) origin; the bottom playfield row is y = 13.
    for x in [1, 2] {
        let cell = fb.get(x, 13).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, jewel_color(JewelKind::Z));
    }
    assert_eq!(fb.get(3, 13).unwrap().ch, ' ');
}

#[test]
fn term_view_centers_board_in_larger_viewports() {
    let snap = BoardEngine::new(13, 6).unwrap().snapshot();

    let fb = GameView::default().render(&snap, Viewport::new(24, 25));

    // start_x = (24 - 14) / 2 = 5, start_y = (25 - 15) / 2 = 5
    assert_eq!(fb.get(5, 5).unwrap().ch, '┌');
    assert_eq!(fb.get(18, 19).unwrap().ch, '┘');
}

#[test]
fn term_view_marks_landed_faller() {
    let mut engine = BoardEngine::new(4, 3).unwrap();
    engine
        .spawn_faller(2, JewelKind::S, JewelKind::T, JewelKind::W)
        .unwrap();
    for _ in 0..3 {
        engine.advance_tick().unwrap();
    }

    let fb = GameView::default().render(&engine.snapshot(), Viewport::new(8, 6));
    assert_eq!(fb.row_text(2), "│    ▒▒│");
    assert_eq!(fb.row_text(4), "│    ▒▒│");
    assert!(fb.get(5, 4).unwrap().style.dim);
}
