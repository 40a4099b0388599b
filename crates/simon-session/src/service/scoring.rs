//! Score Keeper
//!
//! Builds score records and commits them through the [`RankedScores`]
//! capability. Store failures are logged and swallowed: the player never
//! sees a submission error.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::{Leaderboard, LeaderboardView, ScoreRecord, DEFAULT_PLAYER_NAME};
use crate::ports::{DateSource, IdentityProvider, LeaderboardApi, RankedScores};

#[derive(Clone)]
pub struct ScoreKeeper {
    scores: Arc<dyn RankedScores>,
    identity: Arc<dyn IdentityProvider>,
    dates: Arc<dyn DateSource>,
    default_name: String,
}

impl ScoreKeeper {
    pub fn new(
        scores: Arc<dyn RankedScores>,
        identity: Arc<dyn IdentityProvider>,
        dates: Arc<dyn DateSource>,
    ) -> Self {
        Self {
            scores,
            identity,
            dates,
            default_name: DEFAULT_PLAYER_NAME.to_string(),
        }
    }

    pub fn with_default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }

    /// Logged-in name, or the placeholder
    pub fn player_name(&self) -> String {
        self.identity
            .player_name()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.default_name.clone())
    }

    pub fn build_record(&self, score: u32) -> ScoreRecord {
        ScoreRecord::new(self.player_name(), score, self.dates.today())
    }

    /// Commit a final record. Returns the resulting list, or `None` if even
    /// the local fallback failed.
    pub async fn commit(&self, record: ScoreRecord) -> Option<Leaderboard> {
        match self.scores.submit(&record).await {
            Ok(board) => {
                info!(
                    player = %record.name,
                    score = record.score,
                    entries = board.len(),
                    "Score committed"
                );
                Some(board)
            }
            Err(e) => {
                warn!(player = %record.name, score = record.score, error = %e, "Score could not be saved");
                None
            }
        }
    }
}

#[async_trait]
impl LeaderboardApi for ScoreKeeper {
    async fn load_leaderboard(&self) -> LeaderboardView {
        match self.scores.fetch().await {
            Ok(board) => LeaderboardView::project(&board),
            Err(e) => {
                warn!(error = %e, "Leaderboard unavailable");
                LeaderboardView::Empty
            }
        }
    }
}
