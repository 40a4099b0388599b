//! Session Driver
//!
//! Feeds presentation input events into a [`GameSessionApi`]. Events are
//! processed one at a time; whatever arrived while the previous event was
//! being handled (the gate was closed) is discarded, not queued.

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::domain::SignalId;
use crate::error::SessionError;
use crate::ports::{GameSessionApi, PressOutcome};

/// Raw input from the presentation adapter
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Press(SignalId),
    Restart,
    Quit,
}

/// Counters collected while driving a session
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DriverStats {
    pub presses: usize,
    pub ignored: usize,
    pub discarded: usize,
    pub games_finished: usize,
    pub best_score: u32,
}

pub struct SessionDriver<S: GameSessionApi> {
    session: S,
    input: mpsc::Receiver<InputEvent>,
    stats: DriverStats,
}

impl<S: GameSessionApi> SessionDriver<S> {
    pub fn new(session: S, input: mpsc::Receiver<InputEvent>) -> Self {
        Self {
            session,
            input,
            stats: DriverStats::default(),
        }
    }

    /// Start a game and process input until `Quit` or the channel closes.
    ///
    /// Returns the session and the collected stats.
    pub async fn run(mut self) -> Result<(S, DriverStats), SessionError> {
        self.session.restart().await?;

        if !self.discard_stale() {
            while let Some(event) = self.input.recv().await {
                if !self.handle(event).await? {
                    break;
                }
                if self.discard_stale() {
                    break;
                }
            }
        }

        info!(
            games = self.stats.games_finished,
            best = self.stats.best_score,
            "Session ended"
        );
        Ok((self.session, self.stats))
    }

    /// Returns `false` when the driver should stop
    async fn handle(&mut self, event: InputEvent) -> Result<bool, SessionError> {
        match event {
            InputEvent::Press(signal) => {
                self.stats.presses += 1;
                match self.session.press(signal).await {
                    Ok(PressOutcome::Ignored) => self.stats.ignored += 1,
                    Ok(PressOutcome::Mistake { record }) => {
                        self.stats.games_finished += 1;
                        self.stats.best_score = self.stats.best_score.max(record.score);
                    }
                    Ok(outcome) => debug!(?outcome, "Press handled"),
                    Err(SessionError::UnknownSignal(id)) => {
                        warn!(signal = %id, "Press for unknown signal");
                    }
                    Err(e) => return Err(e),
                }
            }
            InputEvent::Restart => {
                self.session.restart().await?;
            }
            InputEvent::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Drop events buffered while the session was busy. Returns `true` if a
    /// `Quit` was among them.
    fn discard_stale(&mut self) -> bool {
        let mut quit = false;
        while let Ok(event) = self.input.try_recv() {
            match event {
                InputEvent::Quit => quit = true,
                other => {
                    self.stats.discarded += 1;
                    debug!(event = ?other, "Discarded input received while busy");
                }
            }
        }
        quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ScoreRecord, SessionPhase};
    use async_trait::async_trait;

    /// Session stand-in whose every press takes effect and can push further
    /// events into the input channel, emulating input arriving mid-feedback
    struct ScriptedSession {
        phase: SessionPhase,
        presses: Vec<SignalId>,
        restarts: usize,
        during_press: Option<(mpsc::Sender<InputEvent>, Vec<InputEvent>)>,
        mistake_on: Option<SignalId>,
    }

    impl ScriptedSession {
        fn new() -> Self {
            Self {
                phase: SessionPhase::Idle,
                presses: Vec::new(),
                restarts: 0,
                during_press: None,
                mistake_on: None,
            }
        }
    }

    #[async_trait]
    impl GameSessionApi for ScriptedSession {
        async fn restart(&mut self) -> Result<bool, SessionError> {
            self.restarts += 1;
            self.phase = SessionPhase::AwaitingPlayerInput;
            Ok(true)
        }

        async fn press(&mut self, signal: SignalId) -> Result<PressOutcome, SessionError> {
            if signal == SignalId(99) {
                return Err(SessionError::UnknownSignal(signal));
            }
            self.presses.push(signal);
            if let Some((tx, events)) = self.during_press.take() {
                for event in events {
                    tx.send(event).await.unwrap();
                }
            }
            if self.mistake_on == Some(signal) {
                return Ok(PressOutcome::Mistake {
                    record: ScoreRecord {
                        name: "p".to_string(),
                        score: 5,
                        date: "1/1/2026".to_string(),
                    },
                });
            }
            Ok(PressOutcome::Correct { cursor: 1 })
        }

        fn phase(&self) -> SessionPhase {
            self.phase
        }
    }

    #[tokio::test]
    async fn test_run_starts_game_and_stops_on_quit() {
        let (tx, rx) = mpsc::channel(16);
        tx.send(InputEvent::Quit).await.unwrap();

        let (session, stats) = SessionDriver::new(ScriptedSession::new(), rx)
            .run()
            .await
            .unwrap();

        assert_eq!(session.restarts, 1);
        assert!(session.presses.is_empty());
        assert_eq!(stats.presses, 0);
    }

    #[tokio::test]
    async fn test_input_during_press_is_discarded() {
        let (tx, rx) = mpsc::channel(16);
        let mut session = ScriptedSession::new();
        session.during_press = Some((
            tx.clone(),
            vec![InputEvent::Press(SignalId(2)), InputEvent::Press(SignalId(3))],
        ));

        let driver = SessionDriver::new(session, rx);
        let run = tokio::spawn(driver.run());
        tokio::task::yield_now().await;

        // The first press is awaited by the driver before sending the rest
        tx.send(InputEvent::Press(SignalId(1))).await.unwrap();
        tokio::task::yield_now().await;
        tx.send(InputEvent::Quit).await.unwrap();

        let (session, stats) = run.await.unwrap().unwrap();

        assert_eq!(session.presses, vec![SignalId(1)]);
        assert_eq!(stats.discarded, 2);
    }

    #[tokio::test]
    async fn test_channel_close_ends_run() {
        let (tx, rx) = mpsc::channel(16);
        drop(tx);

        let result = SessionDriver::new(ScriptedSession::new(), rx).run().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_signal_does_not_stop_driver() {
        let (tx, rx) = mpsc::channel(16);
        let run = tokio::spawn(SessionDriver::new(ScriptedSession::new(), rx).run());
        tokio::task::yield_now().await;

        tx.send(InputEvent::Press(SignalId(99))).await.unwrap();
        tokio::task::yield_now().await;
        tx.send(InputEvent::Press(SignalId(0))).await.unwrap();
        tokio::task::yield_now().await;
        drop(tx);

        let (session, stats) = run.await.unwrap().unwrap();
        assert_eq!(session.presses, vec![SignalId(0)]);
        assert_eq!(stats.presses, 2);
    }

    #[tokio::test]
    async fn test_stats_track_finished_games() {
        let (tx, rx) = mpsc::channel(16);
        let mut session = ScriptedSession::new();
        session.mistake_on = Some(SignalId(1));
        let run = tokio::spawn(SessionDriver::new(session, rx).run());
        tokio::task::yield_now().await;

        tx.send(InputEvent::Press(SignalId(1))).await.unwrap();
        tokio::task::yield_now().await;
        tx.send(InputEvent::Restart).await.unwrap();
        tokio::task::yield_now().await;
        drop(tx);

        let (session, stats) = run.await.unwrap().unwrap();
        assert_eq!(stats.games_finished, 1);
        assert_eq!(stats.best_score, 5);
        assert_eq!(session.restarts, 2);
    }
}
