//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`map::InputCommand`]s and keeps the grid
//! cursor that turns them into [`crate::types::GameAction`]s.

pub mod handler;
pub mod map;

pub use tui_memory_types as types;

pub use handler::{Cursor, InputHandler};
pub use map::{handle_key_event, should_quit, Direction, InputCommand};
