//! Engine configuration
//!
//! Every field has a default, so an empty TOML file is a valid configuration.

use crate::ranker::DEFAULT_MIN_VIABLE;
use crate::solver::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_STEPS, SolverLimits};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("Invalid config value for {field}: {message}")]
    Invalid { field: &'static str, message: String },
}

/// Tunables for one construction run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Ranked list size below which loosened re-extraction runs
    pub min_viable_candidates: usize,
    /// Depth guard for the constraint search
    pub max_search_depth: usize,
    /// Placement attempts before the search gives up
    pub max_search_steps: usize,
    /// Provider calls allowed per run, shared by across and down
    pub clue_call_budget: usize,
    /// Provider calls issued together
    pub clue_batch_size: usize,
    /// Per-call provider timeout
    pub clue_timeout_ms: u64,
    /// Longest clue kept, in characters
    pub max_clue_len: usize,
    /// Letter written into open cells no slot filled
    pub filler_letter: char,
    pub puzzle_title: String,
    /// Document id is `{id_prefix}-{date}`
    pub id_prefix: String,
    pub max_source_urls: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_viable_candidates: DEFAULT_MIN_VIABLE,
            max_search_depth: DEFAULT_MAX_DEPTH,
            max_search_steps: DEFAULT_MAX_STEPS,
            clue_call_budget: 8,
            clue_batch_size: 2,
            clue_timeout_ms: 5000,
            max_clue_len: 60,
            filler_letter: 'A',
            puzzle_title: "Daily Mini Crossword".to_string(),
            id_prefix: "mini".to_string(),
            max_source_urls: 5,
        }
    }
}

impl EngineConfig {
    /// Load and validate configuration from a TOML file
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, parsed, or validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check values the engine cannot run with
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clue_batch_size == 0 {
            return Err(ConfigError::Invalid {
                field: "clue_batch_size",
                message: "must be at least 1".to_string(),
            });
        }
        if self.max_search_depth == 0 {
            return Err(ConfigError::Invalid {
                field: "max_search_depth",
                message: "must be at least 1".to_string(),
            });
        }
        if !self.filler_letter.is_ascii_alphabetic() {
            return Err(ConfigError::Invalid {
                field: "filler_letter",
                message: format!("{:?} is not an ASCII letter", self.filler_letter),
            });
        }
        if self.max_clue_len < 8 {
            return Err(ConfigError::Invalid {
                field: "max_clue_len",
                message: format!("{} is too short for a clue", self.max_clue_len),
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn solver_limits(&self) -> SolverLimits {
        SolverLimits {
            max_depth: self.max_search_depth,
            max_steps: self.max_search_steps,
        }
    }

    #[must_use]
    pub const fn clue_timeout(&self) -> Duration {
        Duration::from_millis(self.clue_timeout_ms)
    }

    /// Filler letter as an uppercase byte
    #[must_use]
    pub fn filler_byte(&self) -> u8 {
        u8::try_from(self.filler_letter.to_ascii_uppercase()).unwrap_or(b'A')
    }
}
