//! # Game Flow Tests
//!
//! Full games from restart to mistake, with the score landing in the file
//! cache because the score server is unreachable.
//!
//! ```text
//! restart → playback → replay (round 1) → replay (round 2) → mistake
//!                                                              │
//!                                  scores.json ←── fallback ←──┘
//! ```

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use tokio::sync::mpsc;

    use simon_session::test_utils::{
        fast_config, other_than, FixedDate, FixedIdentity, InstantPacer, RecordingPresenter,
        RecordingSignals, UnreachableScores,
    };
    use simon_session::{
        CachedScores, FallbackScores, FileLeaderboardCache, GameSession, GameSessionApi,
        InputEvent, LeaderboardApi, LeaderboardCache, LeaderboardView, PressOutcome, ScoreDisplay,
        ScoreKeeper, Sequence, SequenceGenerator, SessionDriver, SessionPhase, SessionPorts,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    struct Game {
        session: GameSession,
        signals: Arc<RecordingSignals>,
        presenter: Arc<RecordingPresenter>,
        cache: Arc<FileLeaderboardCache>,
        keeper: ScoreKeeper,
        _dir: tempfile::TempDir,
    }

    fn keeper_over(cache: Arc<FileLeaderboardCache>) -> ScoreKeeper {
        let scores = FallbackScores::new(UnreachableScores::new(), CachedScores::new(cache));
        ScoreKeeper::new(
            Arc::new(scores),
            FixedIdentity::named("river"),
            FixedDate::ymd(2026, 10, 14),
        )
    }

    fn offline_game(seed: u64) -> Game {
        let dir = tempfile::tempdir().unwrap();
        let cache = Arc::new(FileLeaderboardCache::in_dir(dir.path()));
        let signals = RecordingSignals::new();
        let presenter = RecordingPresenter::new();

        let session = GameSession::with_generator(
            fast_config(),
            SessionPorts {
                signals: signals.clone(),
                pacer: InstantPacer::new(),
                presenter: presenter.clone(),
                scores: keeper_over(cache.clone()),
            },
            SequenceGenerator::with_seed(seed),
        )
        .unwrap();

        Game {
            session,
            signals,
            presenter,
            keeper: keeper_over(cache.clone()),
            cache,
            _dir: dir,
        }
    }

    async fn replay_round(session: &mut GameSession) -> PressOutcome {
        let mut outcome = PressOutcome::Ignored;
        for _ in 0..session.sequence().len() {
            let signal = session.expected().unwrap();
            outcome = session.press(signal).await.unwrap();
        }
        outcome
    }

    // =============================================================================
    // FULL GAME
    // =============================================================================

    #[tokio::test]
    async fn test_full_offline_game_records_score() {
        let mut game = offline_game(11);
        assert!(game.session.restart().await.unwrap());

        assert_eq!(
            replay_round(&mut game.session).await,
            PressOutcome::RoundAdvanced { score: 1 }
        );
        assert_eq!(
            replay_round(&mut game.session).await,
            PressOutcome::RoundAdvanced { score: 2 }
        );
        assert_eq!(game.session.sequence().len(), 3);

        let expected = game.session.expected().unwrap();
        let wrong = other_than(expected, game.session.config());
        let outcome = game.session.press(wrong).await.unwrap();

        let record = match outcome {
            PressOutcome::Mistake { record } => record,
            other => panic!("expected a mistake, got {:?}", other),
        };
        assert_eq!(record.score, 2);
        assert_eq!(record.name, "river");
        assert_eq!(record.date, "10/14/2026");

        // A fresh game is already waiting
        assert_eq!(game.session.phase(), SessionPhase::AwaitingPlayerInput);
        assert_eq!(game.session.sequence().len(), 1);
        assert_eq!(game.signals.failure_cues(), 1);

        let cached = game.cache.load().unwrap().unwrap();
        assert_eq!(cached.entries(), &[record]);

        match game.keeper.load_leaderboard().await {
            LeaderboardView::Ranked(rows) => {
                assert_eq!(rows[0].position, 1);
                assert_eq!(rows[0].score, 2);
            }
            LeaderboardView::Empty => panic!("cached score missing"),
        }
    }

    #[tokio::test]
    async fn test_score_display_through_a_game() {
        let mut game = offline_game(3);
        game.session.restart().await.unwrap();
        replay_round(&mut game.session).await;

        let expected = game.session.expected().unwrap();
        let wrong = other_than(expected, game.session.config());
        game.session.press(wrong).await.unwrap();

        assert_eq!(game.presenter.players(), vec!["river".to_string()]);
        assert_eq!(
            game.presenter.scores(),
            vec![
                ScoreDisplay::Placeholder,
                ScoreDisplay::Value(1),
                ScoreDisplay::Placeholder,
            ]
        );
    }

    #[tokio::test]
    async fn test_playback_repeats_whole_sequence_each_round() {
        let mut game = offline_game(5);
        game.session.restart().await.unwrap();
        replay_round(&mut game.session).await;
        replay_round(&mut game.session).await;

        let sequence: Vec<_> = game.session.sequence().iter().collect();
        game.signals.clear();
        replay_round(&mut game.session).await;

        // Three player presses, then the four-signal playback
        let audible = game.signals.audible();
        assert_eq!(audible.len(), 3 + 4);
        assert_eq!(&audible[..3], sequence.as_slice());
        assert_eq!(&audible[3..6], sequence.as_slice());
    }

    // =============================================================================
    // DRIVER
    // =============================================================================

    #[tokio::test]
    async fn test_driver_discards_presses_queued_during_feedback() {
        let seed = 42;
        let mut first = Sequence::new();
        let config = fast_config();
        let expected = SequenceGenerator::with_seed(seed)
            .extend(&mut first, &config.signals)
            .unwrap();

        let game = offline_game(seed);
        let (tx, rx) = mpsc::channel(16);
        let run = tokio::spawn(SessionDriver::new(game.session, rx).run());
        tokio::task::yield_now().await;

        // Second press queues while the first is being handled
        tx.send(InputEvent::Press(expected)).await.unwrap();
        tx.send(InputEvent::Press(expected)).await.unwrap();
        tokio::task::yield_now().await;
        tx.send(InputEvent::Quit).await.unwrap();

        let (session, stats) = run.await.unwrap().unwrap();

        assert_eq!(stats.presses, 1);
        assert_eq!(stats.discarded, 1);
        assert_eq!(session.score(), 1);
        assert_eq!(session.sequence().len(), 2);
        assert_eq!(session.sequence().get(0), Some(expected));
    }

    #[tokio::test]
    async fn test_driver_restart_starts_new_game() {
        let game = offline_game(9);
        let (tx, rx) = mpsc::channel(16);
        let run = tokio::spawn(SessionDriver::new(game.session, rx).run());
        tokio::task::yield_now().await;

        tx.send(InputEvent::Restart).await.unwrap();
        tokio::task::yield_now().await;
        drop(tx);

        let (session, stats) = run.await.unwrap().unwrap();
        assert_eq!(stats.games_finished, 0);
        assert_eq!(session.sequence().len(), 1);
        assert_eq!(session.phase(), SessionPhase::AwaitingPlayerInput);
        assert!(game.cache.load().unwrap().is_none());
    }
}
