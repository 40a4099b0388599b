//! Remote-first score store with local fallback
//!
//! ```text
//! submit ──→ remote ──ok──→ overwrite cache with server list ──→ list
//!               │
//!               └──err──→ merge into cached list ──→ list
//!
//! fetch  ──→ remote ──ok──→ overwrite cache ──→ list
//!               │
//!               └──err──→ cached list (or empty)
//! ```
//!
//! The server is authoritative for ordering; its list is cached verbatim.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use super::cached::CachedScores;
use crate::domain::{Leaderboard, ScoreRecord};
use crate::error::StoreError;
use crate::ports::{LeaderboardCache, RankedScores};

pub struct FallbackScores<R: RankedScores, C: LeaderboardCache> {
    remote: Arc<R>,
    local: CachedScores<C>,
}

impl<R: RankedScores, C: LeaderboardCache> FallbackScores<R, C> {
    pub fn new(remote: Arc<R>, local: CachedScores<C>) -> Self {
        Self { remote, local }
    }

    fn cache_authoritative(&self, board: &Leaderboard) {
        if let Err(e) = self.local.replace(board) {
            warn!(error = %e, "Failed to cache server leaderboard");
        }
    }
}

#[async_trait]
impl<R, C> RankedScores for FallbackScores<R, C>
where
    R: RankedScores + 'static,
    C: LeaderboardCache + 'static,
{
    async fn submit(&self, record: &ScoreRecord) -> Result<Leaderboard, StoreError> {
        match self.remote.submit(record).await {
            Ok(board) => {
                debug!(entries = board.len(), "Score accepted by server");
                self.cache_authoritative(&board);
                Ok(board)
            }
            Err(e) => {
                warn!(error = %e, "Score server unavailable, merging locally");
                self.local.submit(record).await
            }
        }
    }

    async fn fetch(&self) -> Result<Leaderboard, StoreError> {
        match self.remote.fetch().await {
            Ok(board) => {
                self.cache_authoritative(&board);
                Ok(board)
            }
            Err(e) => {
                warn!(error = %e, "Score server unavailable, using cached leaderboard");
                self.local.fetch().await
            }
        }
    }
}
