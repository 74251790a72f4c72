use serde::{Deserialize, Serialize};

use crate::game_state::Selected;
use crate::types::{Outcome, Player, Symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSnapshot {
    pub id: usize,
    pub symbol: Symbol,
    pub flipped: bool,
    pub matched: bool,
    /// What the presentation should show: flipped, matched or reveal-all.
    pub face_up: bool,
}

/// Read-only view of the engine, rebuilt after every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub cards: Vec<CardSnapshot>,
    pub selection: Vec<Selected>,
    pub matched: Vec<Symbol>,
    pub scores: [u32; 2],
    pub current_player: Player,
    pub reveal_all: bool,
    pub generation: u32,
    pub pending_ms: Option<u32>,
    pub seed: u64,
    pub outcome: Option<Outcome>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cards.clear();
        self.selection.clear();
        self.matched.clear();
        self.scores = [0, 0];
        self.current_player = Player::One;
        self.reveal_all = false;
        self.generation = 0;
        self.pending_ms = None;
        self.seed = 0;
        self.outcome = None;
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()]
    }

    /// Whether a card activation could currently take effect.
    pub fn playable(&self) -> bool {
        !self.reveal_all && self.selection.len() < 2 && self.outcome.is_none()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cards: Vec::new(),
            selection: Vec::new(),
            matched: Vec::new(),
            scores: [0, 0],
            current_player: Player::One,
            reveal_all: false,
            generation: 0,
            pending_ms: None,
            seed: 0,
            outcome: None,
        }
    }
}
