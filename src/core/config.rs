//! Match configuration.
//!
//! `MatchConfig` holds the numeric knobs of a match: board dimensions,
//! clock length and the elixir economy. Piece behavior lives in the
//! `RuleTable`, not here.
//!
//! Every field has a default, so a rules file may omit the whole `[match]`
//! table or any key in it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Smallest board the engine accepts (two home rows per side).
pub const MIN_WIDTH: u8 = 2;
pub const MIN_HEIGHT: u8 = 4;

/// Largest elixir capacity a pool may have.
pub const MAX_ELIXIR: u8 = 10;

/// Numeric match settings.
///
/// ## Example
///
/// ```
/// use rune_rift::core::MatchConfig;
///
/// let config = MatchConfig::default()
///     .with_clock_seconds(300)
///     .with_starting_elixir(2);
///
/// assert_eq!(config.width, 8);
/// assert_eq!(config.starting_clock().as_secs(), 300);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Board width in cells.
    pub width: u8,

    /// Board height in cells.
    pub height: u8,

    /// Starting time on each side's clock, in seconds.
    pub clock_seconds: u64,

    /// Elixir both pools start with.
    pub starting_elixir: u8,

    /// Elixir pool capacity.
    pub max_elixir: u8,

    /// Elixir the mover regains after each completed ply.
    pub elixir_per_ply: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
            clock_seconds: 600,
            starting_elixir: 0,
            max_elixir: 10,
            elixir_per_ply: 1,
        }
    }
}

impl MatchConfig {
    /// Set board dimensions.
    #[must_use]
    pub fn with_board(mut self, width: u8, height: u8) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the starting clock length.
    #[must_use]
    pub fn with_clock_seconds(mut self, seconds: u64) -> Self {
        self.clock_seconds = seconds;
        self
    }

    /// Set the starting elixir for both sides.
    #[must_use]
    pub fn with_starting_elixir(mut self, elixir: u8) -> Self {
        self.starting_elixir = elixir;
        self
    }

    /// Set the elixir capacity.
    #[must_use]
    pub fn with_max_elixir(mut self, max: u8) -> Self {
        self.max_elixir = max;
        self
    }

    /// Set the per-ply regeneration amount.
    #[must_use]
    pub fn with_elixir_per_ply(mut self, amount: u8) -> Self {
        self.elixir_per_ply = amount;
        self
    }

    /// Starting clock as a `Duration`.
    #[must_use]
    pub fn starting_clock(&self) -> Duration {
        Duration::from_secs(self.clock_seconds)
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_WIDTH || self.height < MIN_HEIGHT {
            return Err(ConfigError::InvalidBoard {
                width: self.width,
                height: self.height,
            });
        }
        if self.max_elixir > MAX_ELIXIR || self.starting_elixir > self.max_elixir {
            return Err(ConfigError::InvalidElixir {
                starting: self.starting_elixir,
                max: self.max_elixir,
            });
        }
        if self.clock_seconds == 0 {
            return Err(ConfigError::ZeroClock);
        }
        Ok(())
    }
}
