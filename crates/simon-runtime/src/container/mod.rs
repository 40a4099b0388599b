//! # Game Container
//!
//! Composition root: owns the configuration and the long-lived adapters, and
//! hands out wired [`ScoreKeeper`]s and [`GameSession`]s.
//!
//! ```text
//! offline:  CachedScores(FileLeaderboardCache)
//! online:   FallbackScores(HttpScoreStore, CachedScores(FileLeaderboardCache))
//! ```

pub mod config;

pub use config::{CliOverrides, ConfigError, RuntimeConfig};

use std::sync::Arc;
use tracing::info;

use simon_session::{
    CachedScores, FallbackScores, FileLeaderboardCache, FileProfileStore, GameSession,
    HttpScoreStore, RankedScores, ScoreKeeper, SessionError, SessionPorts, SessionPresenter,
    SignalSource, SystemDateSource, TokioPacer,
};

pub struct GameContainer {
    config: RuntimeConfig,
    profile: Arc<FileProfileStore>,
    scores: Arc<dyn RankedScores>,
}

impl GameContainer {
    pub fn new(config: RuntimeConfig) -> Result<Self, ConfigError> {
        let cache = Arc::new(FileLeaderboardCache::in_dir(&config.data_dir));
        let local = CachedScores::with_capacity(cache, config.session.leaderboard_capacity);

        let scores: Arc<dyn RankedScores> = if config.offline {
            info!(data_dir = %config.data_dir.display(), "Offline mode, using local scores only");
            Arc::new(local)
        } else {
            let remote = Arc::new(HttpScoreStore::new(config.api_url.clone())?);
            info!(api_url = %config.api_url, data_dir = %config.data_dir.display(), "Using score server with local fallback");
            Arc::new(FallbackScores::new(remote, local))
        };

        Ok(Self {
            profile: Arc::new(FileProfileStore::in_dir(&config.data_dir)),
            config,
            scores,
        })
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn profile(&self) -> &FileProfileStore {
        &self.profile
    }

    pub fn score_keeper(&self) -> ScoreKeeper {
        ScoreKeeper::new(
            self.scores.clone(),
            self.profile.clone(),
            Arc::new(SystemDateSource),
        )
        .with_default_name(self.config.session.default_player_name.clone())
    }

    pub fn session(
        &self,
        signals: Arc<dyn SignalSource>,
        presenter: Arc<dyn SessionPresenter>,
    ) -> Result<GameSession, SessionError> {
        GameSession::new(
            self.config.session.clone(),
            SessionPorts {
                signals,
                pacer: Arc::new(TokioPacer),
                presenter,
                scores: self.score_keeper(),
            },
        )
    }
}
