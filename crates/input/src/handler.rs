//! Input handler: grid cursor plus command-to-action translation.
//!
//! Turns [`InputCommand`]s into engine [`GameAction`]s. Cursor moves are
//! absorbed here and never reach the engine.

use crossterm::event::KeyEvent;

use crate::map::{handle_key_event, Direction, InputCommand};
use crate::types::{GameAction, Player, GRID_COLS, SCORE_ADJUST_STEP};

/// Position on a grid of `len` cards laid out `cols` wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: usize,
    cols: usize,
}

impl Cursor {
    pub fn new(len: usize, cols: usize) -> Self {
        Self {
            index: 0,
            len,
            cols: cols.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Jump to `index` if it is on the grid.
    pub fn set(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Move one step, stopping at the grid edges.
    pub fn step(&mut self, dir: Direction) {
        if self.len == 0 {
            return;
        }
        let col = self.index % self.cols;
        let next = match dir {
            Direction::Left if col > 0 => self.index - 1,
            Direction::Right if col + 1 < self.cols => self.index + 1,
            Direction::Up => self.index.checked_sub(self.cols).unwrap_or(self.index),
            Direction::Down => self.index + self.cols,
            _ => self.index,
        };
        if next < self.len {
            self.index = next;
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new(crate::types::DECK_SIZE, GRID_COLS)
    }
}

/// Tracks cursor state and the score adjustment step.
#[derive(Debug, Clone)]
pub struct InputHandler {
    cursor: Cursor,
    adjust_step: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(crate::types::DECK_SIZE, GRID_COLS, SCORE_ADJUST_STEP)
    }

    pub fn with_config(deck_len: usize, cols: usize, adjust_step: u32) -> Self {
        Self {
            cursor: Cursor::new(deck_len, cols),
            adjust_step,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn handle_key_press(&mut self, key: KeyEvent) -> Option<GameAction> {
        handle_key_event(key).and_then(|cmd| self.handle_command(cmd))
    }

    pub fn handle_command(&mut self, cmd: InputCommand) -> Option<GameAction> {
        let step = i32::try_from(self.adjust_step).unwrap_or(i32::MAX);
        match cmd {
            InputCommand::Move(dir) => {
                self.cursor.step(dir);
                None
            }
            InputCommand::Activate => {
                if self.cursor.is_empty() {
                    None
                } else {
                    Some(GameAction::ActivateCard(self.cursor.index()))
                }
            }
            InputCommand::ToggleRevealAll => Some(GameAction::ToggleRevealAll),
            InputCommand::SwitchPlayer => Some(GameAction::SwitchPlayer),
            InputCommand::Raise(player) => Some(adjust(player, step)),
            InputCommand::Lower(player) => Some(adjust(player, -step)),
            InputCommand::Reset => Some(GameAction::Reset),
        }
    }

    /// Pointer activation of a card (already hit-tested by the view).
    pub fn click(&mut self, index: usize) -> Option<GameAction> {
        if self.cursor.set(index) {
            Some(GameAction::ActivateCard(index))
        } else {
            None
        }
    }

    /// Return the cursor to the first card.
    pub fn reset(&mut self) {
        self.cursor.index = 0;
    }
}

fn adjust(player: Player, delta: i32) -> GameAction {
    GameAction::AdjustScore { player, delta }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn test_cursor_stops_at_edges() {
        let mut c = Cursor::new(20, 5);
        c.step(Direction::Left);
        c.step(Direction::Up);
        assert_eq!(c.index(), 0);

        for _ in 0..10 {
            c.step(Direction::Right);
        }
        assert_eq!(c.index(), 4);

        for _ in 0..10 {
            c.step(Direction::Down);
        }
        assert_eq!(c.index(), 19);

        c.step(Direction::Right);
        assert_eq!(c.index(), 19);
    }

    #[test]
    fn test_cursor_on_ragged_last_row() {
        // 7 cards in rows of 5: the second row has two cards.
        let mut c = Cursor::new(7, 5);
        c.set(3);
        c.step(Direction::Down);
        assert_eq!(c.index(), 3);
        c.set(1);
        c.step(Direction::Down);
        assert_eq!(c.index(), 6);
    }

    #[test]
    fn test_cursor_set_rejects_out_of_range() {
        let mut c = Cursor::new(4, 2);
        assert!(c.set(3));
        assert!(!c.set(4));
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn test_empty_cursor_is_inert() {
        let mut handler = InputHandler::with_config(0, 5, 10);
        assert_eq!(handler.handle_command(InputCommand::Move(Direction::Down)), None);
        assert_eq!(handler.handle_command(InputCommand::Activate), None);
        assert_eq!(handler.click(0), None);
    }

    #[test]
    fn test_activate_uses_cursor_position() {
        let mut handler = InputHandler::new();
        assert_eq!(handler.handle_key_press(KeyEvent::from(KeyCode::Right)), None);
        assert_eq!(handler.handle_key_press(KeyEvent::from(KeyCode::Down)), None);
        assert_eq!(
            handler.handle_key_press(KeyEvent::from(KeyCode::Enter)),
            Some(GameAction::ActivateCard(6))
        );
    }

    #[test]
    fn test_score_keys_use_configured_step() {
        let mut handler = InputHandler::with_config(20, 5, 25);
        assert_eq!(
            handler.handle_key_press(KeyEvent::from(KeyCode::Char('2'))),
            Some(GameAction::AdjustScore {
                player: Player::One,
                delta: -25
            })
        );
        assert_eq!(
            handler.handle_key_press(KeyEvent::from(KeyCode::Char('3'))),
            Some(GameAction::AdjustScore {
                player: Player::Two,
                delta: 25
            })
        );
    }

    #[test]
    fn test_click_moves_cursor() {
        let mut handler = InputHandler::new();
        assert_eq!(handler.click(12), Some(GameAction::ActivateCard(12)));
        assert_eq!(handler.cursor().index(), 12);
        handler.reset();
        assert_eq!(handler.cursor().index(), 0);
    }
}
