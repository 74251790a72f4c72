//! Game configuration.
//!
//! Consolidates the tunable constants and their environment variable
//! overrides:
//!
//! - `MEMORY_ALPHABET`: distinct single-column card glyphs, e.g. `"ABCDEFGHIJ"`,
//!   at most [`MAX_ALPHABET_LEN`] of them
//! - `MEMORY_RESOLVE_DELAY_MS`: pause before a pair is resolved
//! - `MEMORY_MATCH_POINTS`: points per found pair
//! - `MEMORY_ADJUST_STEP`: manual score adjustment increment

use thiserror::Error;
use unicode_width::UnicodeWidthChar;

use crate::types::{Symbol, DEFAULT_ALPHABET, MATCH_POINTS, RESOLVE_DELAY_MS, SCORE_ADJUST_STEP};

pub const ENV_ALPHABET: &str = "MEMORY_ALPHABET";
pub const ENV_RESOLVE_DELAY_MS: &str = "MEMORY_RESOLVE_DELAY_MS";
pub const ENV_MATCH_POINTS: &str = "MEMORY_MATCH_POINTS";
pub const ENV_ADJUST_STEP: &str = "MEMORY_ADJUST_STEP";

/// Largest accepted alphabet.
pub const MAX_ALPHABET_LEN: usize = 64;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("alphabet has {len} symbols, at most {max} are allowed")]
    AlphabetTooLarge { len: usize, max: usize },

    #[error("alphabet contains '{0}' more than once")]
    DuplicateSymbol(char),

    #[error("symbol {0:?} does not occupy exactly one terminal column")]
    WideSymbol(char),

    #[error("invalid value for {var}: {value:?} ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Validated game configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    alphabet: Vec<Symbol>,
    resolve_delay_ms: u32,
    match_points: u32,
    adjust_step: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.to_vec(),
            resolve_delay_ms: RESOLVE_DELAY_MS,
            match_points: MATCH_POINTS,
            adjust_step: SCORE_ADJUST_STEP,
        }
    }
}

impl GameConfig {
    /// Reference timings and scores with a custom alphabet.
    pub fn new(alphabet: Vec<Symbol>) -> Result<Self, ConfigError> {
        validate_alphabet(&alphabet)?;
        Ok(Self {
            alphabet,
            ..Self::default()
        })
    }

    pub fn with_resolve_delay_ms(mut self, ms: u32) -> Self {
        self.resolve_delay_ms = ms;
        self
    }

    pub fn with_match_points(mut self, points: u32) -> Self {
        self.match_points = points;
        self
    }

    pub fn with_adjust_step(mut self, step: u32) -> Self {
        self.adjust_step = step;
        self
    }

    /// Load configuration from environment variables, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// alphabet is empty or has duplicates.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`GameConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(ENV_ALPHABET) {
            Some(raw) => Self::new(raw.chars().map(Symbol::new).collect())?,
            None => Self::default(),
        };

        if let Some(ms) = parse_var(&lookup, ENV_RESOLVE_DELAY_MS)? {
            config.resolve_delay_ms = ms;
        }
        if let Some(points) = parse_var(&lookup, ENV_MATCH_POINTS)? {
            config.match_points = points;
        }
        if let Some(step) = parse_var(&lookup, ENV_ADJUST_STEP)? {
            config.adjust_step = step;
        }

        Ok(config)
    }

    pub fn alphabet(&self) -> &[Symbol] {
        &self.alphabet
    }

    /// Number of cards dealt per game.
    pub fn deck_size(&self) -> usize {
        self.alphabet.len() * crate::types::COPIES_PER_SYMBOL
    }

    pub fn resolve_delay_ms(&self) -> u32 {
        self.resolve_delay_ms
    }

    pub fn match_points(&self) -> u32 {
        self.match_points
    }

    pub fn adjust_step(&self) -> u32 {
        self.adjust_step
    }
}

fn validate_alphabet(alphabet: &[Symbol]) -> Result<(), ConfigError> {
    if alphabet.is_empty() {
        return Err(ConfigError::EmptyAlphabet);
    }
    if alphabet.len() > MAX_ALPHABET_LEN {
        return Err(ConfigError::AlphabetTooLarge {
            len: alphabet.len(),
            max: MAX_ALPHABET_LEN,
        });
    }
    for (i, symbol) in alphabet.iter().enumerate() {
        if symbol.glyph().width() != Some(1) {
            return Err(ConfigError::WideSymbol(symbol.glyph()));
        }
        if alphabet[i + 1..].contains(symbol) {
            return Err(ConfigError::DuplicateSymbol(symbol.glyph()));
        }
    }
    Ok(())
}

fn parse_var<F>(lookup: &F, var: &'static str) -> Result<Option<u32>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<u32>()
        .map(Some)
        .map_err(|e| ConfigError::InvalidValue {
            var,
            value: raw.clone(),
            reason: e.to_string(),
        })
}
