//! Cache-backed score store
//!
//! Implements [`RankedScores`] over a [`LeaderboardCache`]: submissions are
//! merged locally (descending numeric score, stable ties, truncated to the
//! capacity) and fetches read the cached list.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::{Leaderboard, ScoreRecord, DEFAULT_LEADERBOARD_CAPACITY};
use crate::error::StoreError;
use crate::ports::{LeaderboardCache, RankedScores};

pub struct CachedScores<C: LeaderboardCache> {
    cache: Arc<C>,
    capacity: usize,
}

impl<C: LeaderboardCache> CachedScores<C> {
    pub fn new(cache: Arc<C>) -> Self {
        Self {
            cache,
            capacity: DEFAULT_LEADERBOARD_CAPACITY,
        }
    }

    pub fn with_capacity(cache: Arc<C>, capacity: usize) -> Self {
        Self {
            cache,
            capacity: capacity.max(1),
        }
    }

    /// Overwrite the cache with an authoritative list
    pub fn replace(&self, board: &Leaderboard) -> Result<(), StoreError> {
        self.cache.store(board)
    }

    /// Cached list, empty when nothing was cached. A cache that does not
    /// parse counts as absent.
    pub fn current(&self) -> Result<Leaderboard, StoreError> {
        match self.cache.load() {
            Ok(board) => Ok(board.unwrap_or_default()),
            Err(StoreError::Parse(reason)) => {
                warn!(%reason, "Ignoring malformed leaderboard cache");
                Ok(Leaderboard::new())
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl<C: LeaderboardCache + 'static> RankedScores for CachedScores<C> {
    async fn submit(&self, record: &ScoreRecord) -> Result<Leaderboard, StoreError> {
        let mut board = self.current()?;
        let rank = board.insert(record.clone(), self.capacity);
        debug!(
            score = record.score,
            rank = ?rank.map(|r| r + 1),
            entries = board.len(),
            "Merged score into local leaderboard"
        );
        self.cache.store(&board)?;
        Ok(board)
    }

    async fn fetch(&self) -> Result<Leaderboard, StoreError> {
        self.current()
    }
}
