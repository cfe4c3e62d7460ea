use tui_blicblock::core::{GameConfig, GameState};
use tui_blicblock::term::{color_of, FrameBuffer, GameView, Viewport};
use tui_blicblock::types::{Intent, Phase};

fn all_text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y)).collect::<Vec<_>>().join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(GameConfig::default(), 1).unwrap().snapshot();
    let view = GameView::default();

    // 5 cells * 2 columns + border = 12 wide; 7 rows + border = 9 tall.
    let fb = view.render(&snap, Viewport::new(12, 9));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(11, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 8).unwrap().ch, '└');
    assert_eq!(fb.get(11, 8).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_grid_cell_two_columns_wide() {
    let mut game = GameState::new(GameConfig::default(), 1).unwrap();
    game.grid_mut().set(0, 6, 3);
    let snap = game.snapshot();

    let fb = GameView::default().render(&snap, Viewport::new(12, 9));

    // Inside border: (1,1) origin.
    let (x0, y0) = (1, 1 + 6);
    for x in [x0, x0 + 1] {
        let glyph = fb.get(x, y0).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.style.fg, color_of(3));
    }
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_cell() {
    let mut game = GameState::new(GameConfig::default(), 1).unwrap();
    game.apply_move(Intent::StepDown);
    let snap = game.snapshot();

    let fb = GameView::default().render(&snap, Viewport::new(12, 9));
    let glyph = fb.get(1 + 2 * 2, 1 + 1).unwrap();
    assert_eq!(glyph.ch, '█');
    assert_eq!(glyph.style.fg, color_of(snap.active.unwrap().color));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut game = GameState::new(GameConfig::default(), 1).unwrap();
    for _ in 0..7 {
        game.apply_move(Intent::StepDown);
    }
    let snap = game.snapshot();

    let fb = GameView::default().render(&snap, Viewport::new(40, 12));
    let text = all_text(&fb);
    assert!(text.contains("NEXT"));
    assert!(text.contains("PIECES"));
    assert!(text.contains("CLEARED"));

    // The narrow viewport leaves the panel out.
    let narrow = GameView::default().render(&snap, Viewport::new(12, 9));
    assert!(!all_text(&narrow).contains("NEXT"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut game = GameState::new(GameConfig::default(), 1).unwrap();
    game.grid_mut().set(2, 1, 5);
    game.apply_move(Intent::StepDown);
    let snap = game.snapshot();
    assert_eq!(snap.phase, Phase::GameOver);

    let fb = GameView::default().render(&snap, Viewport::new(30, 9));
    assert!(all_text(&fb).contains("GAME OVER"));
}

#[test]
fn term_view_render_into_reuses_buffer_after_resize() {
    let snap = GameState::new(GameConfig::default(), 1).unwrap().snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(1, 1);

    view.render_into(&snap, Viewport::new(20, 10), &mut fb);
    assert_eq!((fb.width(), fb.height()), (20, 10));
    view.render_into(&snap, Viewport::new(12, 9), &mut fb);
    assert_eq!((fb.width(), fb.height()), (12, 9));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}
