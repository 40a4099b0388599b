//! Session configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use simon_session::domain::SessionConfigBuilder;
//!
//! let config = SessionConfigBuilder::new()
//!     .initial_pause_ms(250)
//!     .lose_laps(3)
//!     .build()
//!     .expect("Valid config");
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::score::DEFAULT_LEADERBOARD_CAPACITY;
use super::signal::SignalBank;
use crate::error::SessionError;

/// Name used when no player has logged in
pub const DEFAULT_PLAYER_NAME: &str = "Mystery Player";

/// Largest accepted pause, to catch unit mistakes (seconds given as ms)
const MAX_PAUSE_MS: u64 = 10_000;

/// Timing and scoring parameters of a game session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Pause before the first signal of every playback
    pub initial_pause_ms: u64,
    /// Pause after each signal of a playback
    pub inter_signal_pause_ms: u64,
    /// Animation passes when a new game starts
    pub intro_laps: u32,
    /// Animation passes after a mistake
    pub lose_laps: u32,
    /// Entries kept when merging scores locally
    pub leaderboard_capacity: usize,
    /// Display name when the profile has none
    pub default_player_name: String,
    /// Buttons available to the player
    pub signals: SignalBank,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_pause_ms: 500,
            inter_signal_pause_ms: 100,
            intro_laps: 1,
            lose_laps: 2,
            leaderboard_capacity: DEFAULT_LEADERBOARD_CAPACITY,
            default_player_name: DEFAULT_PLAYER_NAME.to_string(),
            signals: SignalBank::classic(),
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), SessionError> {
        self.signals.validate()?;

        if self.leaderboard_capacity == 0 {
            return Err(SessionError::InvalidConfig(
                "leaderboard_capacity cannot be 0".to_string(),
            ));
        }

        if self.initial_pause_ms > MAX_PAUSE_MS || self.inter_signal_pause_ms > MAX_PAUSE_MS {
            return Err(SessionError::InvalidConfig(format!(
                "pauses must not exceed {} ms",
                MAX_PAUSE_MS
            )));
        }

        if self.default_player_name.trim().is_empty() {
            return Err(SessionError::InvalidConfig(
                "default_player_name cannot be blank".to_string(),
            ));
        }

        Ok(())
    }

    pub fn initial_pause(&self) -> Duration {
        Duration::from_millis(self.initial_pause_ms)
    }

    pub fn inter_signal_pause(&self) -> Duration {
        Duration::from_millis(self.inter_signal_pause_ms)
    }
}

/// Fluent builder for [`SessionConfig`]
#[derive(Default)]
pub struct SessionConfigBuilder {
    initial_pause_ms: Option<u64>,
    inter_signal_pause_ms: Option<u64>,
    intro_laps: Option<u32>,
    lose_laps: Option<u32>,
    leaderboard_capacity: Option<usize>,
    default_player_name: Option<String>,
    signals: Option<SignalBank>,
}

impl SessionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_pause_ms(mut self, ms: u64) -> Self {
        self.initial_pause_ms = Some(ms);
        self
    }

    pub fn inter_signal_pause_ms(mut self, ms: u64) -> Self {
        self.inter_signal_pause_ms = Some(ms);
        self
    }

    pub fn intro_laps(mut self, laps: u32) -> Self {
        self.intro_laps = Some(laps);
        self
    }

    pub fn lose_laps(mut self, laps: u32) -> Self {
        self.lose_laps = Some(laps);
        self
    }

    pub fn leaderboard_capacity(mut self, capacity: usize) -> Self {
        self.leaderboard_capacity = Some(capacity);
        self
    }

    pub fn default_player_name(mut self, name: impl Into<String>) -> Self {
        self.default_player_name = Some(name.into());
        self
    }

    pub fn signals(mut self, signals: SignalBank) -> Self {
        self.signals = Some(signals);
        self
    }

    /// Build and validate
    pub fn build(self) -> Result<SessionConfig, SessionError> {
        let defaults = SessionConfig::default();

        let config = SessionConfig {
            initial_pause_ms: self.initial_pause_ms.unwrap_or(defaults.initial_pause_ms),
            inter_signal_pause_ms: self
                .inter_signal_pause_ms
                .unwrap_or(defaults.inter_signal_pause_ms),
            intro_laps: self.intro_laps.unwrap_or(defaults.intro_laps),
            lose_laps: self.lose_laps.unwrap_or(defaults.lose_laps),
            leaderboard_capacity: self
                .leaderboard_capacity
                .unwrap_or(defaults.leaderboard_capacity),
            default_player_name: self
                .default_player_name
                .unwrap_or(defaults.default_player_name),
            signals: self.signals.unwrap_or(defaults.signals),
        };

        config.validate()?;
        Ok(config)
    }
}
