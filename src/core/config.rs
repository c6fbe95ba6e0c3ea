//! Game configuration.
//!
//! The rules themselves are fixed: four seats, two tokens, a 56-square
//! ring. `GameConfig` only covers how the driver treats its input.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Driver configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Highest roll accepted in a turn list (default: 6, a single die).
    /// `None` accepts any positive roll.
    #[serde(default = "GameConfig::default_max_roll")]
    pub max_roll: Option<u32>,

    /// Keep a `TurnRecord` for every applied turn.
    #[serde(default = "GameConfig::default_record_history")]
    pub record_history: bool,
}

impl GameConfig {
    /// Standard six-sided die.
    pub const DIE_FACES: u32 = 6;

    const fn default_max_roll() -> Option<u32> {
        Some(Self::DIE_FACES)
    }

    const fn default_record_history() -> bool {
        true
    }

    /// Set the highest accepted roll.
    #[must_use]
    pub fn with_max_roll(mut self, max: u32) -> Self {
        self.max_roll = Some(max);
        self
    }

    /// Accept any positive roll.
    #[must_use]
    pub fn unbounded_rolls(mut self) -> Self {
        self.max_roll = None;
        self
    }

    /// Enable or disable per-turn history.
    #[must_use]
    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Check the configuration for impossible values.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.max_roll == Some(0) {
            return Err(GameError::InvalidConfig("max_roll must be at least 1"));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_roll: Self::default_max_roll(),
            record_history: Self::default_record_history(),
        }
    }
}
