//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with serde derives, usable in any context (core
//! logic, terminal rendering, logging).
//!
//! # Deck Dimensions
//!
//! - **Alphabet**: 10 distinct symbols by default
//! - **Deck**: every symbol twice, 20 cards
//! - **Grid**: 5 columns, 4 rows
//!
//! # Timing and Score Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `RESOLVE_DELAY_MS` | 1000 | Pause before a two-card selection is resolved |
//! | `MATCH_POINTS` | 10 | Points awarded for a found pair |
//! | `SCORE_ADJUST_STEP` | 10 | Manual score adjustment increment |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{GameAction, Player, Symbol, DEFAULT_ALPHABET};
//!
//! assert_eq!(Player::One.other(), Player::Two);
//! assert_eq!(Player::Two.number(), 2);
//!
//! let action = GameAction::from_str("reset").unwrap();
//! assert_eq!(action, GameAction::Reset);
//!
//! assert_eq!(DEFAULT_ALPHABET.len(), 10);
//! assert_eq!(Symbol::new('A').glyph(), 'A');
//! ```

use serde::{Deserialize, Serialize};

/// Number of distinct symbols in the default alphabet.
pub const ALPHABET_SIZE: usize = 10;

/// How many copies of each symbol go into the deck.
pub const COPIES_PER_SYMBOL: usize = 2;

/// Cards in a default deck (20).
pub const DECK_SIZE: usize = ALPHABET_SIZE * COPIES_PER_SYMBOL;

/// Columns of the card grid.
pub const GRID_COLS: usize = 5;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Delay between the second flip and match resolution.
pub const RESOLVE_DELAY_MS: u32 = 1000;

/// Points for a matched pair.
pub const MATCH_POINTS: u32 = 10;

/// Manual score adjustment step (+/-).
pub const SCORE_ADJUST_STEP: u32 = 10;

/// Default glyphs. All single-column in common terminal fonts.
pub const DEFAULT_ALPHABET: [Symbol; ALPHABET_SIZE] = [
    Symbol('★'),
    Symbol('♠'),
    Symbol('♥'),
    Symbol('♦'),
    Symbol('♣'),
    Symbol('☀'),
    Symbol('☂'),
    Symbol('♪'),
    Symbol('✿'),
    Symbol('☯'),
];

/// A card face.
///
/// Symbols carry no structure beyond identity; the wrapped glyph is only
/// used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(pub char);

impl Symbol {
    pub const fn new(glyph: char) -> Self {
        Self(glyph)
    }

    pub fn glyph(&self) -> char {
        self.0
    }
}

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// The opponent.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_memory_types::Player;
    ///
    /// assert_eq!(Player::One.other(), Player::Two);
    /// assert_eq!(Player::Two.other(), Player::One);
    /// ```
    pub fn other(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Zero-based index into per-player arrays.
    pub fn index(&self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    /// One-based number as shown to humans.
    pub fn number(&self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Parse from a one-based number (`1` or `2`).
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }
}

/// Actions that can be applied to the game engine
///
/// Every user intent forwarded by the presentation layer maps to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Flip the card at the given deck index
    ActivateCard(usize),
    /// Show or hide every card face (display only)
    ToggleRevealAll,
    /// Hand the turn to the other player
    SwitchPlayer,
    /// Add a signed delta to a player's score (floored at 0)
    AdjustScore { player: Player, delta: i32 },
    /// Deal a fresh game
    Reset,
}

impl GameAction {
    /// Parse a parameterless action from its name.
    ///
    /// `ActivateCard` and `AdjustScore` carry data and are not parsed here.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_memory_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("toggleRevealAll"), Some(GameAction::ToggleRevealAll));
    /// assert_eq!(GameAction::from_str("SWITCHPLAYER"), Some(GameAction::SwitchPlayer));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "togglerevealall" => Some(GameAction::ToggleRevealAll),
            "switchplayer" => Some(GameAction::SwitchPlayer),
            "reset" => Some(GameAction::Reset),
            _ => None,
        }
    }

    /// camelCase name, used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::ActivateCard(_) => "activateCard",
            GameAction::ToggleRevealAll => "toggleRevealAll",
            GameAction::SwitchPlayer => "switchPlayer",
            GameAction::AdjustScore { .. } => "adjustScore",
            GameAction::Reset => "reset",
        }
    }
}

/// Outcome of a resolved two-card selection.
///
/// Emitted by the engine and consumed by observers (status line, logs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoreLastEvent {
    Matched {
        symbol: Symbol,
        player: Player,
        points: u32,
    },
    Mismatched {
        next_player: Player,
    },
}

/// Final result once every pair is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Player),
    Tie,
}
