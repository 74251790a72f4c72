use tui_memory::core::{GameConfig, GameState};
use tui_memory::term::{AnchorY, FrameBuffer, GameView, HudView, Viewport, CARD_W};
use tui_memory::types::{CoreLastEvent, Player, Symbol};

const A: Symbol = Symbol('A');
const B: Symbol = Symbol('B');

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_string(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn layout_centers_default_grid() {
    // 5x4 grid of 7x3 cards with 1-column gaps: 39 wide, panel 40 wide.
    let view = GameView::default();
    let layout = view.layout(Viewport::new(80, 24), 20);

    assert_eq!(layout.cols, 5);
    assert_eq!(layout.rows, 4);
    assert_eq!((layout.x, layout.y), (20, 2));
    assert_eq!((layout.grid_x, layout.grid_y), (20, 7));
    assert_eq!(layout.card_origin(0), (20, 7));
    assert_eq!(layout.card_origin(6), (28, 10));
    assert_eq!(layout.card_origin(19), (52, 16));
}

#[test]
fn hit_testing_maps_pointer_to_cards() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);

    assert_eq!(view.card_at(vp, 20, 20, 7), Some(0));
    assert_eq!(view.card_at(vp, 20, 20 + CARD_W - 1, 9), Some(0));
    // Gap column between card 0 and card 1.
    assert_eq!(view.card_at(vp, 20, 20 + CARD_W, 8), None);
    assert_eq!(view.card_at(vp, 20, 28, 10), Some(6));
    assert_eq!(view.card_at(vp, 20, 58, 18), Some(19));
    // Outside the grid.
    assert_eq!(view.card_at(vp, 20, 19, 7), None);
    assert_eq!(view.card_at(vp, 20, 20, 6), None);
    assert_eq!(view.card_at(vp, 20, 20, 19), None);
    assert_eq!(view.card_at(vp, 0, 20, 7), None);
}

#[test]
fn hit_testing_skips_missing_cards_in_last_row() {
    let view = GameView::new(5).with_anchor_y(AnchorY::Top);
    let vp = Viewport::new(40, 20);
    let layout = view.layout(vp, 7);
    let (x, y) = layout.card_origin(6);

    assert_eq!(view.card_at(vp, 7, x, y), Some(6));
    assert_eq!(view.card_at(vp, 7, x + CARD_W + 1, y), None);
}

#[test]
fn oversized_deck_layout_saturates() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let layout = view.layout(vp, 120_000);

    assert_eq!(layout.cols, 5);
    assert_eq!(layout.rows, 24_000);
    assert_eq!(layout.y, 0);
    assert_eq!(layout.card_origin(0), (layout.grid_x, layout.grid_y));
    assert_eq!(layout.card_origin(119_999).1, u16::MAX);
    assert_eq!(view.card_at(vp, 120_000, layout.grid_x, layout.grid_y), Some(0));
}

#[test]
fn face_down_cards_hide_symbols() {
    let state = GameState::new(GameConfig::default(), 1);
    let snap = state.snapshot();
    let fb = GameView::default().render(&snap, &HudView::default(), Viewport::new(80, 24));

    assert_eq!(fb.get(20, 7).unwrap().ch, '┌');
    assert_eq!(fb.get(20 + CARD_W - 1, 9).unwrap().ch, '┘');
    assert_eq!(fb.get(23, 8).unwrap().ch, '?');

    let text = screen_text(&fb);
    assert!(text.contains("MEMORY"));
    assert!(text.contains("PLAYER 1: 0"));
    assert!(text.contains("PLAYER 2: 0"));
    assert!(text.contains("TURN: PLAYER 1"));
    for symbol in state.config().alphabet() {
        assert!(!text.contains(symbol.glyph()));
    }
}

#[test]
fn flipped_and_revealed_cards_show_symbols() {
    let config = GameConfig::new(vec![A, B]).unwrap();
    let mut state = GameState::with_deck(config, 1, &[A, B, A, B]).unwrap();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let vp = Viewport::new(60, 20);
    let layout = view.layout(vp, 4);
    let center = |i: usize| {
        let (x, y) = layout.card_origin(i);
        (x + CARD_W / 2, y + 1)
    };

    state.activate_card(1);
    let fb = view.render(&state.snapshot(), &HudView::default(), vp);
    let (x, y) = center(1);
    assert_eq!(fb.get(x, y).unwrap().ch, 'B');
    let (x, y) = center(0);
    assert_eq!(fb.get(x, y).unwrap().ch, '?');

    state.toggle_reveal_all();
    let fb = view.render(&state.snapshot(), &HudView::default(), vp);
    for (i, glyph) in ['A', 'B', 'A', 'B'].into_iter().enumerate() {
        let (x, y) = center(i);
        assert_eq!(fb.get(x, y).unwrap().ch, glyph);
    }
    assert!(screen_text(&fb).contains("ALL CARDS SHOWN"));
}

#[test]
fn cursor_card_border_is_highlighted() {
    let state = GameState::new(GameConfig::default(), 1);
    let snap = state.snapshot();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);

    let plain = view.render(&snap, &HudView::default(), vp);
    let hud = HudView {
        cursor: Some(0),
        last_event: None,
    };
    let highlighted = view.render(&snap, &hud, vp);

    assert!(!plain.get(20, 7).unwrap().style.bold);
    assert!(highlighted.get(20, 7).unwrap().style.bold);
    assert_eq!(plain.get(28, 7), highlighted.get(28, 7));
}

#[test]
fn status_line_reports_last_event_and_winner() {
    let config = GameConfig::new(vec![A]).unwrap();
    let mut state = GameState::with_deck(config, 1, &[A, A]).unwrap();
    state.switch_player();
    state.activate_card(0);
    state.activate_card(1);
    state.resolve_now();

    let hud = HudView {
        cursor: None,
        last_event: state.take_last_event(),
    };
    assert_eq!(
        hud.last_event,
        Some(CoreLastEvent::Matched {
            symbol: A,
            player: Player::Two,
            points: 10
        })
    );

    let fb = GameView::default().render(&state.snapshot(), &hud, Viewport::new(80, 24));
    let text = screen_text(&fb);
    assert!(text.contains("PLAYER 2 FOUND A +10"));
    assert!(text.contains("PLAYER 2 WINS"));
    assert!(text.contains("PLAYER 2: 10"));
}
