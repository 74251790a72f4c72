//! Deck module - building, validating and dealing the card deck.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::GameRng;
use crate::types::{Symbol, COPIES_PER_SYMBOL};

/// One deck position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Index in the shuffled deck; stable for the whole game.
    pub id: usize,
    pub symbol: Symbol,
    pub is_flipped: bool,
}

/// Errors for caller-supplied decks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("deck has {actual} cards, expected {expected}")]
    WrongLength { expected: usize, actual: usize },

    #[error("symbol '{symbol}' is not in the alphabet")]
    UnknownSymbol { symbol: char },

    #[error("symbol '{symbol}' appears {count} times, expected {expected}")]
    WrongCount {
        symbol: char,
        count: usize,
        expected: usize,
    },
}

/// Duplicate the alphabet and shuffle it.
pub fn build_deck(alphabet: &[Symbol], rng: &mut GameRng) -> Vec<Symbol> {
    let mut symbols = Vec::with_capacity(alphabet.len() * COPIES_PER_SYMBOL);
    for _ in 0..COPIES_PER_SYMBOL {
        symbols.extend_from_slice(alphabet);
    }
    rng.shuffle(&mut symbols);
    symbols
}

/// Check that `symbols` holds every alphabet symbol exactly twice and nothing else.
pub fn validate_deck(alphabet: &[Symbol], symbols: &[Symbol]) -> Result<(), DeckError> {
    let expected = alphabet.len() * COPIES_PER_SYMBOL;
    if symbols.len() != expected {
        return Err(DeckError::WrongLength {
            expected,
            actual: symbols.len(),
        });
    }

    if let Some(unknown) = symbols.iter().find(|s| !alphabet.contains(*s)) {
        return Err(DeckError::UnknownSymbol {
            symbol: unknown.glyph(),
        });
    }

    for symbol in alphabet {
        let count = symbols.iter().filter(|s| *s == symbol).count();
        if count != COPIES_PER_SYMBOL {
            return Err(DeckError::WrongCount {
                symbol: symbol.glyph(),
                count,
                expected: COPIES_PER_SYMBOL,
            });
        }
    }

    Ok(())
}

/// Materialize face-down cards from a symbol sequence.
pub fn deal(symbols: &[Symbol]) -> Vec<Card> {
    symbols
        .iter()
        .enumerate()
        .map(|(id, &symbol)| Card {
            id,
            symbol,
            is_flipped: false,
        })
        .collect()
}
