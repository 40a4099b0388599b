//! # Runtime Configuration
//!
//! Layered configuration for the `simon` binary. Later layers win:
//!
//! 1. Built-in defaults
//! 2. Optional JSON config file (`--config`)
//! 3. Environment (`SIMON_API_URL`, `SIMON_DATA_DIR`, `SIMON_OFFLINE`)
//! 4. Command-line flags

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use simon_session::{SessionConfig, SessionError, StoreError};

/// Score server used when nothing else is configured
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// How long a signal stays lit in the terminal
pub const DEFAULT_TONE_MS: u64 = 300;

const MAX_TONE_MS: u64 = 5_000;

pub const ENV_API_URL: &str = "SIMON_API_URL";
pub const ENV_DATA_DIR: &str = "SIMON_DATA_DIR";
pub const ENV_OFFLINE: &str = "SIMON_OFFLINE";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid runtime configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Score store setup failed: {0}")]
    Store(#[from] StoreError),
}

/// Complete runtime configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Base URL of the score server.
    pub api_url: String,
    /// Directory holding `scores.json` and `profile.json`.
    pub data_dir: PathBuf,
    /// Skip the score server and use only the local cache.
    pub offline: bool,
    /// Signal feedback duration in milliseconds.
    pub tone_ms: u64,
    /// Round timing, signals and leaderboard capacity.
    pub session: SessionConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: PathBuf::from("./data"),
            offline: false,
            tone_ms: DEFAULT_TONE_MS,
            session: SessionConfig::default(),
        }
    }
}

/// Values given on the command line. `None` leaves the lower layer alone.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub api_url: Option<String>,
    pub data_dir: Option<PathBuf>,
    pub offline: bool,
    pub tone_ms: Option<u64>,
}

impl RuntimeConfig {
    /// Build the full layered configuration from the process environment.
    pub fn load(config_file: Option<&Path>, cli: &CliOverrides) -> Result<Self, ConfigError> {
        Self::load_with(config_file, cli, |key| std::env::var(key).ok())
    }

    /// Same as [`RuntimeConfig::load`] with an explicit environment lookup.
    pub fn load_with<F>(
        config_file: Option<&Path>,
        cli: &CliOverrides,
        env: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(env);
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        info!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    pub fn apply_env<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = env(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            self.api_url = url;
        }
        if let Some(dir) = env(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(flag) = env(ENV_OFFLINE) {
            match parse_flag(&flag) {
                Some(offline) => self.offline = offline,
                None => warn!(value = %flag, "{} must be a boolean, ignoring", ENV_OFFLINE),
            }
        }
    }

    pub fn apply_cli(&mut self, cli: &CliOverrides) {
        if let Some(url) = &cli.api_url {
            self.api_url = url.clone();
        }
        if let Some(dir) = &cli.data_dir {
            self.data_dir = dir.clone();
        }
        if cli.offline {
            self.offline = true;
        }
        if let Some(tone) = cli.tone_ms {
            self.tone_ms = tone;
        }
    }

    /// # Returns
    ///
    /// Returns `Err` if:
    /// - the API URL is not http(s) while online
    /// - the tone duration exceeds 5 seconds
    /// - the session configuration is invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.offline
            && !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://"))
        {
            return Err(ConfigError::Invalid(format!(
                "api_url must start with http:// or https://, got {:?}",
                self.api_url
            )));
        }
        if self.tone_ms > MAX_TONE_MS {
            return Err(ConfigError::Invalid(format!(
                "tone_ms must be at most {}",
                MAX_TONE_MS
            )));
        }
        self.session.validate()?;
        Ok(())
    }

    pub fn tone(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tone_ms)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
