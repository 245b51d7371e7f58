//! Simulation configuration.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// How `min_turns_to_win` is aggregated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MinTurnsMode {
    /// Starts at 0 and folds with `min`, so it stays 0 for every run.
    #[default]
    Faithful,
    /// Seeded from the first won game; tracks the true minimum.
    Corrected,
}

/// Parameters for a batch of random games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Board edge length N (the board has N×N cells).
    pub board_size: usize,

    /// Number of games to play.
    pub trials: u64,

    /// RNG seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Aggregation rule for the minimum turns-to-win statistic.
    pub min_turns_mode: MinTurnsMode,

    /// Run trials on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            board_size: 3,
            trials: 10_000,
            seed: None,
            min_turns_mode: MinTurnsMode::Faithful,
            parallel: false,
        }
    }
}

impl SimulationConfig {
    /// Create a config with the default parameters (3×3, 10000 trials).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board edge length.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the number of trials.
    #[must_use]
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }

    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the min-turns aggregation rule.
    #[must_use]
    pub fn with_min_turns_mode(mut self, mode: MinTurnsMode) -> Self {
        self.min_turns_mode = mode;
        self
    }

    /// Enable or disable parallel trials.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check that the parameters describe a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::Validation("board_size must be >= 1".to_string()));
        }
        let cells = self.board_size.checked_mul(self.board_size).ok_or_else(|| {
            ConfigError::Validation(format!("board_size {} is too large", self.board_size))
        })?;
        if u32::try_from(cells).is_err() {
            return Err(ConfigError::Validation(format!(
                "board_size {} has more cells than a turn counter can hold",
                self.board_size
            )));
        }
        Ok(())
    }
}
