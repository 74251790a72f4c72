//! Runtime settings for the terminal binary.
//!
//! - `MEMORY_SEED`: deal seed (`u64`); random when unset
//! - `MEMORY_LOG_FILE`: append logs here; logging is off when unset, since
//!   the terminal belongs to the renderer
//! - `RUST_LOG`: log filter (default `info`)

use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

pub const ENV_SEED: &str = "MEMORY_SEED";
pub const ENV_LOG_FILE: &str = "MEMORY_LOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuntimeConfig {
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl RuntimeConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = match lookup(ENV_SEED) {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| anyhow!("{}: invalid seed: {}", ENV_SEED, raw))?,
            ),
            None => None,
        };
        let log_file = lookup(ENV_LOG_FILE)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { seed, log_file })
    }

    /// Configured seed, or a fresh random one.
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    /// Route `log` output to the configured file.
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .format_target(false)
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init()
            .context("installing logger")?;
        Ok(())
    }
}

/// Combine the game loop result with the terminal restore result.
///
/// A loop error wins; a restore failure behind it is only logged.
pub fn finish(run: Result<()>, restore: Result<()>) -> Result<()> {
    match (run, restore) {
        (Ok(()), restore) => restore.context("failed to restore terminal"),
        (Err(e), Err(restore_err)) => {
            log::warn!("failed to restore terminal: {:#}", restore_err);
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
    }
}
