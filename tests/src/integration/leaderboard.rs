//! # Leaderboard Flow Tests
//!
//! Score persistence across the remote store and the local cache:
//!
//! 1. **Remote down, cache empty**: the "be the first to score" state
//! 2. **Remote down**: scores merge into the cache in numeric order
//! 3. **Remote up**: the server list replaces the cache verbatim
//! 4. **Remote recovers**: reads switch back to the server list

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;

    use simon_runtime::commands::scores::render;
    use simon_runtime::{GameContainer, RuntimeConfig};
    use simon_session::test_utils::{make_record, FixedDate, FixedIdentity, ScriptedScores, UnreachableScores};
    use simon_session::{
        CachedScores, FallbackScores, FileLeaderboardCache, Leaderboard, LeaderboardApi,
        LeaderboardCache, LeaderboardView, RankedScores, ScoreKeeper, ScoreRecord, StoreError,
        EMPTY_LEADERBOARD_MESSAGE, SCORES_FILE,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    /// Score server that can be switched on and off
    struct ToggleServer {
        online: Mutex<bool>,
        board: Mutex<Leaderboard>,
    }

    impl ToggleServer {
        fn new(online: bool, board: Leaderboard) -> Arc<Self> {
            Arc::new(Self {
                online: Mutex::new(online),
                board: Mutex::new(board),
            })
        }

        fn set_online(&self, online: bool) {
            *self.online.lock() = online;
        }

        fn check(&self) -> Result<(), StoreError> {
            if *self.online.lock() {
                Ok(())
            } else {
                Err(StoreError::Connection("server switched off".to_string()))
            }
        }
    }

    #[async_trait]
    impl RankedScores for ToggleServer {
        async fn submit(&self, record: &ScoreRecord) -> Result<Leaderboard, StoreError> {
            self.check()?;
            let mut board = self.board.lock();
            board.insert(record.clone(), 10);
            Ok(board.clone())
        }

        async fn fetch(&self) -> Result<Leaderboard, StoreError> {
            self.check()?;
            Ok(self.board.lock().clone())
        }
    }

    fn keeper<R: RankedScores + 'static>(remote: Arc<R>, cache: Arc<FileLeaderboardCache>) -> ScoreKeeper {
        ScoreKeeper::new(
            Arc::new(FallbackScores::new(remote, CachedScores::new(cache))),
            FixedIdentity::anonymous(),
            FixedDate::ymd(2026, 10, 14),
        )
    }

    fn scores_of(view: &LeaderboardView) -> Vec<u32> {
        match view {
            LeaderboardView::Empty => Vec::new(),
            LeaderboardView::Ranked(rows) => rows.iter().map(|r| r.score).collect(),
        }
    }

    // =============================================================================
    // REMOTE DOWN
    // =============================================================================

    #[tokio::test]
    async fn test_empty_state_when_nothing_is_known() {
        let dir = tempfile::tempdir().unwrap();
        let cache = Arc::new(FileLeaderboardCache::in_dir(dir.path()));
        let keeper = keeper(UnreachableScores::new(), cache);

        let view = keeper.load_leaderboard().await;

        assert_eq!(view, LeaderboardView::Empty);
        assert_eq!(render(&view), EMPTY_LEADERBOARD_MESSAGE);
    }

    #[tokio::test]
    async fn test_offline_scores_rank_numerically_and_cap_at_ten() {
        let dir = tempfile::tempdir().unwrap();
        let cache = Arc::new(FileLeaderboardCache::in_dir(dir.path()));
        let keeper = keeper(UnreachableScores::new(), cache.clone());

        for score in [2, 10, 9, 1, 100, 3, 0, 11, 4, 5, 6, 7] {
            keeper.commit(keeper.build_record(score)).await.unwrap();
        }

        let view = keeper.load_leaderboard().await;
        assert_eq!(scores_of(&view), vec![100, 11, 10, 9, 7, 6, 5, 4, 3, 2]);

        let on_disk: Vec<ScoreRecord> =
            serde_json::from_slice(&std::fs::read(dir.path().join(SCORES_FILE)).unwrap()).unwrap();
        assert_eq!(on_disk.len(), 10);
        assert_eq!(on_disk[0].name, "Mystery Player");
    }

    #[tokio::test]
    async fn test_repeated_reads_are_stable() {
        let dir = tempfile::tempdir().unwrap();
        let cache = Arc::new(FileLeaderboardCache::in_dir(dir.path()));
        cache
            .store(&Leaderboard::from_ranked(vec![make_record("a", 5), make_record("b", 1)]))
            .unwrap();
        let keeper = keeper(UnreachableScores::new(), cache);

        let first = keeper.load_leaderboard().await;
        let second = keeper.load_leaderboard().await;

        assert_eq!(first, second);
        assert_eq!(scores_of(&first), vec![5, 1]);
    }

    #[tokio::test]
    async fn test_malformed_cache_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SCORES_FILE), b"{ not a list").unwrap();
        let cache = Arc::new(FileLeaderboardCache::in_dir(dir.path()));
        let keeper = keeper(UnreachableScores::new(), cache);

        assert_eq!(keeper.load_leaderboard().await, LeaderboardView::Empty);
    }

    // =============================================================================
    // REMOTE UP
    // =============================================================================

    #[tokio::test]
    async fn test_server_list_overwrites_cache_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let cache = Arc::new(FileLeaderboardCache::in_dir(dir.path()));
        cache
            .store(&Leaderboard::from_ranked(vec![make_record("local", 50)]))
            .unwrap();

        let server_board = Leaderboard::from_ranked(vec![make_record("x", 9), make_record("y", 4)]);
        let server = ScriptedScores::responding(server_board.clone());
        let keeper = keeper(server.clone(), cache.clone());

        let board = keeper.commit(make_record("me", 1)).await.unwrap();

        assert_eq!(board, server_board);
        assert_eq!(cache.load().unwrap(), Some(server_board));
        assert_eq!(server.submitted(), vec![make_record("me", 1)]);
    }

    #[tokio::test]
    async fn test_outage_then_recovery() {
        let dir = tempfile::tempdir().unwrap();
        let cache = Arc::new(FileLeaderboardCache::in_dir(dir.path()));
        let server = ToggleServer::new(
            false,
            Leaderboard::from_ranked(vec![make_record("champ", 40)]),
        );
        let keeper = keeper(server.clone(), cache.clone());

        // Offline: only the local score is known
        keeper.commit(keeper.build_record(3)).await.unwrap();
        assert_eq!(scores_of(&keeper.load_leaderboard().await), vec![3]);

        // Online again: the server view wins and is cached
        server.set_online(true);
        keeper.commit(keeper.build_record(7)).await.unwrap();
        assert_eq!(scores_of(&keeper.load_leaderboard().await), vec![40, 7]);

        server.set_online(false);
        assert_eq!(scores_of(&keeper.load_leaderboard().await), vec![40, 7]);
        assert_eq!(cache.load().unwrap().unwrap().len(), 2);
    }

    // =============================================================================
    // RUNTIME WIRING
    // =============================================================================

    #[tokio::test]
    async fn test_offline_runtime_scores_command() {
        let dir = tempfile::tempdir().unwrap();
        let container = GameContainer::new(RuntimeConfig {
            data_dir: dir.path().to_path_buf(),
            offline: true,
            ..Default::default()
        })
        .unwrap();

        assert_eq!(
            simon_runtime::commands::scores::run(&container).await,
            EMPTY_LEADERBOARD_MESSAGE
        );

        simon_runtime::commands::login::run(&container, "zed").unwrap();
        container
            .score_keeper()
            .commit(container.score_keeper().build_record(8))
            .await
            .unwrap();

        let text = simon_runtime::commands::scores::run(&container).await;
        assert!(text.contains("zed"));
        assert!(text.contains("  1  "));
    }
}
