//! Game state module - manages the complete game state
//!
//! Holds the dealt cards, the pending selection, matched symbols, scores and
//! the active player, plus every transition the presentation layer can
//! trigger. Match resolution is paced by a countdown advanced through
//! [`GameState::tick`]; the pending pair is captured when the second card is
//! flipped and tagged with the current deal generation, so a reset during the
//! countdown discards it instead of applying it to the new deal.

use arrayvec::ArrayVec;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::deck::{build_deck, deal, validate_deck, Card, DeckError};
use crate::rng::GameRng;
use crate::snapshot::{CardSnapshot, GameSnapshot};
use crate::types::*;

/// A flipped card waiting for resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selected {
    pub index: usize,
    pub symbol: Symbol,
}

/// A completed two-card selection scheduled for resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingResolution {
    /// Deal generation the pair was flipped in.
    pub generation: u32,
    pub first: Selected,
    pub second: Selected,
    pub remaining_ms: u32,
}

impl PendingResolution {
    pub fn is_match(&self) -> bool {
        self.first.symbol == self.second.symbol
    }

    fn same_pair(&self, other: &PendingResolution) -> bool {
        self.generation == other.generation
            && self.first == other.first
            && self.second == other.second
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    rng: GameRng,
    cards: Vec<Card>,
    selection: ArrayVec<Selected, 2>,
    /// Matched symbols in the order they were found.
    matched: Vec<Symbol>,
    scores: [u32; 2],
    current_player: Player,
    reveal_all: bool,
    /// Monotonic deal id (increments on reset).
    generation: u32,
    pending: Option<PendingResolution>,
    /// Last resolution event (consumed by observers).
    last_event: Option<CoreLastEvent>,
}

impl GameState {
    /// Deal a new game with the given RNG seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let symbols = build_deck(config.alphabet(), &mut rng);
        Self::from_parts(config, rng, &symbols)
    }

    /// Start from a caller-supplied deck order.
    ///
    /// Later resets shuffle with `seed` as usual.
    pub fn with_deck(config: GameConfig, seed: u64, symbols: &[Symbol]) -> Result<Self, DeckError> {
        validate_deck(config.alphabet(), symbols)?;
        Ok(Self::from_parts(config, GameRng::new(seed), symbols))
    }

    fn from_parts(config: GameConfig, rng: GameRng, symbols: &[Symbol]) -> Self {
        debug!(
            "dealt {} cards (seed {})",
            symbols.len(),
            rng.seed()
        );
        Self {
            config,
            rng,
            cards: deal(symbols),
            selection: ArrayVec::new(),
            matched: Vec::with_capacity(symbols.len() / COPIES_PER_SYMBOL),
            scores: [0, 0],
            current_player: Player::One,
            reveal_all: false,
            generation: 0,
            pending: None,
            last_event: None,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn selection(&self) -> &[Selected] {
        &self.selection
    }

    pub fn matched(&self) -> &[Symbol] {
        &self.matched
    }

    pub fn is_matched(&self, symbol: Symbol) -> bool {
        self.matched.contains(&symbol)
    }

    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn reveal_all(&self) -> bool {
        self.reveal_all
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn pending(&self) -> Option<PendingResolution> {
        self.pending
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Whether the card at `index` shows its face (flipped, matched or reveal-all).
    pub fn is_face_up(&self, index: usize) -> bool {
        self.cards.get(index).is_some_and(|card| {
            self.reveal_all || card.is_flipped || self.is_matched(card.symbol)
        })
    }

    /// Every pair has been found.
    pub fn is_finished(&self) -> bool {
        self.matched.len() == self.config.alphabet().len()
    }

    /// Winner by score once the board is cleared.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_finished() {
            return None;
        }
        let [one, two] = self.scores;
        Some(match one.cmp(&two) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::One),
            std::cmp::Ordering::Less => Outcome::Winner(Player::Two),
            std::cmp::Ordering::Equal => Outcome::Tie,
        })
    }

    /// Take and clear the last resolution event.
    pub fn take_last_event(&mut self) -> Option<CoreLastEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cards.clear();
        out.cards.extend(self.cards.iter().map(|card| CardSnapshot {
            id: card.id,
            symbol: card.symbol,
            flipped: card.is_flipped,
            matched: self.is_matched(card.symbol),
            face_up: self.reveal_all || card.is_flipped || self.is_matched(card.symbol),
        }));
        out.selection.clear();
        out.selection.extend_from_slice(&self.selection);
        out.matched.clear();
        out.matched.extend_from_slice(&self.matched);
        out.scores = self.scores;
        out.current_player = self.current_player;
        out.reveal_all = self.reveal_all;
        out.generation = self.generation;
        out.pending_ms = self.pending.map(|p| p.remaining_ms);
        out.seed = self.rng.seed();
        out.outcome = self.outcome();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Reshuffle and start over.
    ///
    /// The RNG keeps running, so each reset deals a new permutation. Any
    /// pending resolution belongs to the old deal and is dropped.
    pub fn reset(&mut self) {
        let symbols = build_deck(self.config.alphabet(), &mut self.rng);
        self.cards = deal(&symbols);
        self.selection.clear();
        self.matched.clear();
        self.scores = [0, 0];
        self.current_player = Player::One;
        self.reveal_all = false;
        self.generation = self.generation.wrapping_add(1);
        if let Some(stale) = self.pending.take() {
            trace!(
                "reset dropped pending resolution of generation {}",
                stale.generation
            );
        }
        self.last_event = None;
        info!("new deal, generation {}", self.generation);
    }

    /// Flip the card at `index`.
    ///
    /// Returns `false` without touching state when reveal-all is on, two cards
    /// are already pending, the index is out of range, or the card is already
    /// face up or matched.
    pub fn activate_card(&mut self, index: usize) -> bool {
        if self.reveal_all || self.selection.is_full() {
            return false;
        }

        let Some(card) = self.cards.get_mut(index) else {
            return false;
        };
        if card.is_flipped || self.matched.contains(&card.symbol) {
            return false;
        }

        card.is_flipped = true;
        let symbol = card.symbol;
        self.selection.push(Selected { index, symbol });
        debug!(
            "player {} flipped card {} ({})",
            self.current_player.number(),
            index,
            symbol.glyph()
        );

        if let [first, second] = self.selection.as_slice() {
            self.pending = Some(PendingResolution {
                generation: self.generation,
                first: *first,
                second: *second,
                remaining_ms: self.config.resolve_delay_ms(),
            });
        }

        true
    }

    /// Apply a scheduled resolution.
    ///
    /// Only the resolution currently pending in this generation is applied;
    /// anything else (stale generation, already resolved) is ignored and
    /// `false` is returned.
    pub fn resolve(&mut self, resolution: PendingResolution) -> bool {
        let current = match self.pending {
            Some(p) if p.same_pair(&resolution) && p.generation == self.generation => p,
            _ => {
                trace!(
                    "ignoring stale resolution (generation {}, current {})",
                    resolution.generation,
                    self.generation
                );
                return false;
            }
        };
        self.pending = None;

        let PendingResolution { first, second, .. } = current;
        let event = if first.symbol == second.symbol {
            if !self.matched.contains(&first.symbol) {
                self.matched.push(first.symbol);
            }
            let player = self.current_player;
            let points = self.config.match_points();
            let score = &mut self.scores[player.index()];
            *score = score.saturating_add(points);
            debug!(
                "player {} matched {} (+{})",
                player.number(),
                first.symbol.glyph(),
                points
            );
            CoreLastEvent::Matched {
                symbol: first.symbol,
                player,
                points,
            }
        } else {
            for index in [first.index, second.index] {
                if let Some(card) = self.cards.get_mut(index) {
                    card.is_flipped = false;
                }
            }
            self.current_player = self.current_player.other();
            debug!(
                "no match ({} / {}), turn passes to player {}",
                first.symbol.glyph(),
                second.symbol.glyph(),
                self.current_player.number()
            );
            CoreLastEvent::Mismatched {
                next_player: self.current_player,
            }
        };

        self.selection.clear();
        self.last_event = Some(event);

        if self.is_finished() {
            info!(
                "board cleared, scores {} / {}",
                self.scores[0], self.scores[1]
            );
        }

        true
    }

    /// Resolve the pending pair immediately, skipping the remaining delay.
    pub fn resolve_now(&mut self) -> bool {
        match self.pending {
            Some(pending) => self.resolve(pending),
            None => false,
        }
    }

    /// Main game tick - advance the resolution countdown
    ///
    /// Returns `true` when a resolution fired during this tick.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };

        pending.remaining_ms = pending.remaining_ms.saturating_sub(elapsed_ms);
        if pending.remaining_ms > 0 {
            return false;
        }

        let due = *pending;
        self.resolve(due)
    }

    /// Display-only override; cards and selection are untouched.
    pub fn toggle_reveal_all(&mut self) {
        self.reveal_all = !self.reveal_all;
    }

    /// Hand the turn over regardless of game state.
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.other();
    }

    /// Add `delta` to `player`'s score, never going below zero.
    ///
    /// Returns whether the score changed.
    pub fn adjust_score(&mut self, player: Player, delta: i32) -> bool {
        let score = &mut self.scores[player.index()];
        let next = (i64::from(*score) + i64::from(delta)).clamp(0, i64::from(u32::MAX)) as u32;
        let changed = next != *score;
        *score = next;
        changed
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        trace!("action {}", action.as_str());
        match action {
            GameAction::ActivateCard(index) => self.activate_card(index),
            GameAction::ToggleRevealAll => {
                self.toggle_reveal_all();
                true
            }
            GameAction::SwitchPlayer => {
                self.switch_player();
                true
            }
            GameAction::AdjustScore { player, delta } => self.adjust_score(player, delta),
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default(), 1)
    }
}
