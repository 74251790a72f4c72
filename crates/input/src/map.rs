//! Key mapping from terminal events to input commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::Player;

/// Cursor movement on the card grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// What a key press asks for, before cursor position and score step are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Move(Direction),
    /// Flip the card under the cursor
    Activate,
    ToggleRevealAll,
    SwitchPlayer,
    /// Add one adjustment step to a player's score
    Raise(Player),
    /// Remove one adjustment step from a player's score
    Lower(Player),
    Reset,
}

/// Map keyboard input to commands.
pub fn handle_key_event(key: KeyEvent) -> Option<InputCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(InputCommand::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(InputCommand::Move(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(InputCommand::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(InputCommand::Move(Direction::Down))
        }

        // Flip
        KeyCode::Enter | KeyCode::Char(' ') => Some(InputCommand::Activate),

        // Table controls
        KeyCode::Char('v') | KeyCode::Char('V') => Some(InputCommand::ToggleRevealAll),
        KeyCode::Tab | KeyCode::Char('p') | KeyCode::Char('P') => Some(InputCommand::SwitchPlayer),
        KeyCode::Char('1') => Some(InputCommand::Raise(Player::One)),
        KeyCode::Char('2') => Some(InputCommand::Lower(Player::One)),
        KeyCode::Char('3') => Some(InputCommand::Raise(Player::Two)),
        KeyCode::Char('4') => Some(InputCommand::Lower(Player::Two)),

        // New game
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputCommand::Reset),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
