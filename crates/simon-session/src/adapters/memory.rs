//! In-memory leaderboard cache.

use parking_lot::RwLock;

use crate::domain::Leaderboard;
use crate::error::StoreError;
use crate::ports::LeaderboardCache;

/// Leaderboard cache held in process memory
#[derive(Debug, Default)]
pub struct InMemoryLeaderboardCache {
    board: RwLock<Option<Leaderboard>>,
}

impl InMemoryLeaderboardCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_board(board: Leaderboard) -> Self {
        Self {
            board: RwLock::new(Some(board)),
        }
    }
}

impl LeaderboardCache for InMemoryLeaderboardCache {
    fn load(&self) -> Result<Option<Leaderboard>, StoreError> {
        Ok(self.board.read().clone())
    }

    fn store(&self, board: &Leaderboard) -> Result<(), StoreError> {
        *self.board.write() = Some(board.clone());
        Ok(())
    }
}
