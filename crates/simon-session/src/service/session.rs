//! Game Session
//!
//! Owns the sequence, the replay cursor and the phase. All mutation goes
//! through `&mut self`; the only suspension points are signal feedback and
//! pacing delays.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::scoring::ScoreKeeper;
use crate::domain::{
    Intensity, ScoreDisplay, Sequence, SequenceGenerator, SessionConfig, SessionPhase, SignalId,
};
use crate::error::SessionError;
use crate::ports::{GameSessionApi, Pacer, PressOutcome, SessionPresenter, SignalSource};

/// How long a new game waits for a slow score submission once the lose
/// feedback has finished. The submission keeps running afterwards.
pub const SUBMIT_GRACE: Duration = Duration::from_millis(250);

/// External collaborators of a session
pub struct SessionPorts {
    pub signals: Arc<dyn SignalSource>,
    pub pacer: Arc<dyn Pacer>,
    pub presenter: Arc<dyn SessionPresenter>,
    pub scores: ScoreKeeper,
}

pub struct GameSession {
    config: SessionConfig,
    phase: SessionPhase,
    sequence: Sequence,
    /// Next position the player must match; `0..=sequence.len()`
    cursor: usize,
    generator: SequenceGenerator,
    signals: Arc<dyn SignalSource>,
    pacer: Arc<dyn Pacer>,
    presenter: Arc<dyn SessionPresenter>,
    scores: ScoreKeeper,
}

impl GameSession {
    /// Create an idle session. Shows the player's name immediately.
    pub fn new(config: SessionConfig, ports: SessionPorts) -> Result<Self, SessionError> {
        Self::with_generator(config, ports, SequenceGenerator::new())
    }

    pub fn with_generator(
        config: SessionConfig,
        ports: SessionPorts,
        generator: SequenceGenerator,
    ) -> Result<Self, SessionError> {
        config.validate()?;

        let scores = ports
            .scores
            .with_default_name(config.default_player_name.clone());
        ports.presenter.show_player(&scores.player_name());

        Ok(Self {
            config,
            phase: SessionPhase::Idle,
            sequence: Sequence::new(),
            cursor: 0,
            generator,
            signals: ports.signals,
            pacer: ports.pacer,
            presenter: ports.presenter,
            scores,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Completed rounds of the current game
    pub fn score(&self) -> u32 {
        self.sequence.score()
    }

    pub fn player_name(&self) -> String {
        self.scores.player_name()
    }

    /// Signal the player must press next, while awaiting input
    pub fn expected(&self) -> Option<SignalId> {
        if self.phase.input_enabled() {
            self.sequence.get(self.cursor)
        } else {
            None
        }
    }

    fn enter(&mut self, next: SessionPhase) -> Result<(), SessionError> {
        self.phase = self.phase.transition(next)?;
        debug!(phase = ?next, len = self.sequence.len(), cursor = self.cursor, "Phase changed");
        self.presenter.phase_changed(next);
        Ok(())
    }

    /// Every signal in bank order at zero intensity, `laps` times
    async fn animate(&self, laps: u32) {
        for _ in 0..laps {
            for id in self.config.signals.ids() {
                self.signals.activate(id, Intensity::SILENT).await;
            }
        }
    }

    async fn lose_feedback(&self) {
        self.signals.failure_cue().await;
        self.animate(self.config.lose_laps).await;
    }

    /// Replay the whole sequence, then open the gate
    async fn play_back(&mut self) -> Result<(), SessionError> {
        self.enter(SessionPhase::PlayingBack)?;

        self.pacer.pause(self.config.initial_pause()).await;
        for id in self.sequence.iter() {
            self.signals.activate(id, Intensity::FULL).await;
            self.pacer.pause(self.config.inter_signal_pause()).await;
        }

        self.enter(SessionPhase::AwaitingPlayerInput)
    }

    async fn reset(&mut self) -> Result<(), SessionError> {
        self.enter(SessionPhase::Resetting)?;
        self.sequence.clear();
        self.cursor = 0;
        self.presenter.show_score(&ScoreDisplay::Placeholder);

        self.animate(self.config.intro_laps).await;

        self.generator
            .extend(&mut self.sequence, &self.config.signals)
            .ok_or_else(|| SessionError::InvalidConfig("signal bank is empty".to_string()))?;
        info!(player = %self.scores.player_name(), "New game started");

        self.play_back().await
    }

    async fn advance_round(&mut self) -> Result<PressOutcome, SessionError> {
        self.enter(SessionPhase::RoundAdvance)?;
        self.cursor = 0;
        self.generator
            .extend(&mut self.sequence, &self.config.signals)
            .ok_or_else(|| SessionError::InvalidConfig("signal bank is empty".to_string()))?;

        let score = self.sequence.score();
        self.presenter.show_score(&ScoreDisplay::Value(score));
        debug!(score, len = self.sequence.len(), "Round complete");

        self.play_back().await?;
        Ok(PressOutcome::RoundAdvanced { score })
    }

    /// Close the game: submit the score while the lose feedback plays, then
    /// start a new game. A submission still pending `SUBMIT_GRACE` after the
    /// feedback is left running in the background.
    async fn end_round(&mut self, pressed: SignalId) -> Result<PressOutcome, SessionError> {
        self.enter(SessionPhase::RoundEnd)?;

        let score = self.sequence.score();
        let record = self.scores.build_record(score);
        info!(
            player = %record.name,
            score,
            expected = ?self.sequence.get(self.cursor),
            pressed = %pressed,
            "Game over"
        );

        let keeper = self.scores.clone();
        let submission = record.clone();
        let mut pending = tokio::spawn(async move { keeper.commit(submission).await });

        self.lose_feedback().await;

        tokio::select! {
            joined = &mut pending => {
                if let Err(e) = joined {
                    warn!(error = %e, "Score submission task failed");
                }
            }
            _ = tokio::time::sleep(SUBMIT_GRACE) => {
                debug!(score, "Score still submitting, starting next game");
            }
        }

        self.reset().await?;
        Ok(PressOutcome::Mistake { record })
    }
}

#[async_trait]
impl GameSessionApi for GameSession {
    async fn restart(&mut self) -> Result<bool, SessionError> {
        if !self.phase.accepts_restart() {
            debug!(phase = ?self.phase, "Restart ignored");
            return Ok(false);
        }
        self.reset().await?;
        Ok(true)
    }

    async fn press(&mut self, signal: SignalId) -> Result<PressOutcome, SessionError> {
        if !self.phase.input_enabled() {
            debug!(signal = %signal, phase = ?self.phase, "Press ignored, input gate closed");
            return Ok(PressOutcome::Ignored);
        }
        if !self.config.signals.contains(signal) {
            return Err(SessionError::UnknownSignal(signal));
        }

        self.enter(SessionPhase::ValidatingInput)?;
        self.signals.activate(signal, Intensity::FULL).await;

        if self.sequence.get(self.cursor) != Some(signal) {
            return self.end_round(signal).await;
        }

        self.cursor += 1;
        if self.cursor == self.sequence.len() {
            return self.advance_round().await;
        }

        self.enter(SessionPhase::AwaitingPlayerInput)?;
        Ok(PressOutcome::Correct {
            cursor: self.cursor,
        })
    }

    fn phase(&self) -> SessionPhase {
        self.phase
    }
}
