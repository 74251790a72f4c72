//! Turn-cycle scenarios on a fixed two-symbol deck.

use tui_memory::core::{GameConfig, GameState, Selected};
use tui_memory::types::{CoreLastEvent, Player, Symbol, RESOLVE_DELAY_MS, TICK_MS};

const A: Symbol = Symbol('A');
const B: Symbol = Symbol('B');

/// Deck pre-shuffled to [A, B, A, B].
fn abab() -> GameState {
    let config = GameConfig::new(vec![A, B]).unwrap();
    GameState::with_deck(config, 2024, &[A, B, A, B]).unwrap()
}

fn run_clock(state: &mut GameState, ms: u32) {
    let mut elapsed = 0;
    while elapsed < ms {
        state.tick(TICK_MS);
        elapsed += TICK_MS;
    }
}

#[test]
fn mismatch_then_match_scenario() {
    let mut state = abab();

    assert!(state.activate_card(0));
    assert_eq!(state.selection(), &[Selected { index: 0, symbol: A }]);

    assert!(state.activate_card(1));
    assert_eq!(
        state.selection(),
        &[
            Selected { index: 0, symbol: A },
            Selected { index: 1, symbol: B }
        ]
    );
    assert!(state.pending().is_some());

    run_clock(&mut state, RESOLVE_DELAY_MS);
    assert!(!state.cards()[0].is_flipped);
    assert!(!state.cards()[1].is_flipped);
    assert_eq!(state.current_player(), Player::Two);
    assert!(state.selection().is_empty());

    assert!(state.activate_card(0));
    assert!(state.activate_card(2));
    run_clock(&mut state, RESOLVE_DELAY_MS);

    assert_eq!(state.matched(), &[A]);
    assert_eq!(state.score(Player::Two), 10);
    assert_eq!(state.score(Player::One), 0);
    assert!(state.selection().is_empty());
    assert_eq!(state.current_player(), Player::Two);
    assert_eq!(
        state.take_last_event(),
        Some(CoreLastEvent::Matched {
            symbol: A,
            player: Player::Two,
            points: 10
        })
    );
}

#[test]
fn nothing_resolves_before_delay() {
    let mut state = abab();
    state.activate_card(0);
    state.activate_card(1);

    run_clock(&mut state, RESOLVE_DELAY_MS - 2 * TICK_MS);
    assert!(state.pending().is_some());
    assert!(state.cards()[0].is_flipped && state.cards()[1].is_flipped);
    assert_eq!(state.current_player(), Player::One);
}

#[test]
fn matched_cards_ignore_activation() {
    let mut state = abab();
    state.activate_card(0);
    state.activate_card(2);
    state.resolve_now();

    let before = state.snapshot();
    assert!(!state.activate_card(0));
    assert!(!state.activate_card(2));
    assert_eq!(state.snapshot(), before);
}

#[test]
fn flipped_card_ignores_second_activation() {
    let mut state = abab();
    state.activate_card(3);
    let before = state.snapshot();
    assert!(!state.activate_card(3));
    assert_eq!(state.snapshot(), before);
}

#[test]
fn adjust_score_never_below_zero() {
    let mut state = abab();
    state.adjust_score(Player::One, -10);
    assert_eq!(state.score(Player::One), 0);
}

#[test]
fn reset_during_pending_resolution_is_clean() {
    let mut state = abab();
    state.activate_card(0);
    state.activate_card(2);
    let stale = state.pending().unwrap();
    state.adjust_score(Player::Two, 30);
    state.switch_player();
    state.toggle_reveal_all();

    state.reset();
    run_clock(&mut state, RESOLVE_DELAY_MS * 2);
    assert!(!state.resolve(stale));

    assert_eq!(state.scores(), [0, 0]);
    assert_eq!(state.current_player(), Player::One);
    assert!(state.matched().is_empty());
    assert!(!state.reveal_all());
    assert!(state.selection().is_empty());
    assert!(state.cards().iter().all(|c| !c.is_flipped));
    assert_eq!(state.generation(), 1);
}

#[test]
fn reset_deals_new_permutation() {
    let mut state = GameState::new(GameConfig::default(), 77);
    let first: Vec<Symbol> = state.cards().iter().map(|c| c.symbol).collect();

    state.activate_card(0);
    state.reset();
    let second: Vec<Symbol> = state.cards().iter().map(|c| c.symbol).collect();

    assert_eq!(second.len(), 20);
    assert_ne!(first, second);
    assert_eq!(state.scores(), [0, 0]);
}

#[test]
fn same_seed_same_deal() {
    let a = GameState::new(GameConfig::default(), 9);
    let b = GameState::new(GameConfig::default(), 9);
    assert_eq!(a.cards(), b.cards());
}

#[test]
fn full_game_reaches_outcome() {
    let mut state = abab();
    // P1 misses, P2 finds both pairs.
    state.activate_card(0);
    state.activate_card(1);
    state.resolve_now();
    for (x, y) in [(0, 2), (1, 3)] {
        state.activate_card(x);
        state.activate_card(y);
        state.resolve_now();
    }

    assert!(state.is_finished());
    assert_eq!(
        state.outcome(),
        Some(tui_memory::types::Outcome::Winner(Player::Two))
    );
    assert!(!state.snapshot().playable());
}
