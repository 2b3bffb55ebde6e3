//! Engine configuration
//!
//! Tunable rules that are not fixed by the payout tiers: starting lives,
//! the grace window, the per-question timer and the skip policy.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_GRACE_THRESHOLD, DEFAULT_LADDER_RUNGS, DEFAULT_SECONDS_PER_QUESTION,
    DEFAULT_STARTING_LIVES,
};
use super::errors::{ConfigError, GameResult};

/// What the skip lifeline does to the current streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipPolicy {
    /// Skipping breaks the streak (and its running balance).
    #[default]
    ResetStreak,
    /// Skipping leaves the streak as it was; the skipped question earns nothing.
    PreserveStreak,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub starting_lives: u32,
    /// Exclusive upper bound on the question index that still costs a life.
    pub grace_threshold: usize,
    pub seconds_per_question: u32,
    pub skip_policy: SkipPolicy,
    pub ladder_rungs: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            starting_lives: DEFAULT_STARTING_LIVES,
            grace_threshold: DEFAULT_GRACE_THRESHOLD,
            seconds_per_question: DEFAULT_SECONDS_PER_QUESTION,
            skip_policy: SkipPolicy::default(),
            ladder_rungs: DEFAULT_LADDER_RUNGS,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_lives == 0 {
            return Err(ConfigError::NoStartingLives);
        }
        if self.seconds_per_question == 0 {
            return Err(ConfigError::ZeroTimer);
        }
        Ok(())
    }

    /// Parse a TOML document. Missing keys fall back to the defaults.
    pub fn from_toml_str(text: &str) -> GameResult<Self> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> GameResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Whether a wrong answer at `index` falls inside the grace window.
    pub fn in_grace_window(&self, index: usize) -> bool {
        index < self.grace_threshold
    }
}
