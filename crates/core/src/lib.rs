//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the memory game rules, state management, and the
//! paced match resolution. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed deals identical games
//! - **Testable**: Every transition is a plain method call
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`config`]: alphabet, timings and score constants, with env overrides
//! - [`deck`]: deck building, validation and dealing
//! - [`game_state`]: complete game state and its transitions
//! - [`rng`]: seeded Fisher-Yates shuffling
//! - [`snapshot`]: serializable read-only view for renderers
//!
//! # Game Rules
//!
//! - Every symbol appears exactly twice; cards are dealt face down
//! - A turn flips two cards; after a short pause they are resolved
//! - **Match**: the pair stays face up and the active player scores
//! - **Mismatch**: both cards flip back and the turn passes
//! - Scores can be adjusted manually but never drop below zero
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{GameConfig, GameState};
//! use tui_memory_types::{GameAction, Player, Symbol};
//!
//! let (a, b) = (Symbol('A'), Symbol('B'));
//! let config = GameConfig::new(vec![a, b]).unwrap();
//! let mut game = GameState::with_deck(config, 1, &[a, b, a, b]).unwrap();
//!
//! game.apply_action(GameAction::ActivateCard(0));
//! game.apply_action(GameAction::ActivateCard(2));
//!
//! // Resolution fires after the pacing delay.
//! game.tick(1000);
//! assert_eq!(game.score(Player::One), 10);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds. The pending pair resolves once the configured delay
//! (1000ms by default) has elapsed.

pub mod config;
pub mod deck;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, GameConfig};
pub use deck::{build_deck, deal, validate_deck, Card, DeckError};
pub use game_state::{GameState, PendingResolution, Selected};
pub use rng::GameRng;
pub use snapshot::{CardSnapshot, GameSnapshot};
