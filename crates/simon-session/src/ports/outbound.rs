//! Outbound Ports (Driven Ports)
//!
//! Dependencies the session needs from its host: the signal source that
//! renders feedback, pacing delays, presentation, player identity, dates and
//! the score store.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;

use crate::domain::{Intensity, Leaderboard, ScoreDisplay, ScoreRecord, SessionPhase, SignalId};
use crate::error::StoreError;

/// Sensory feedback for signals (Driven Port)
///
/// `activate` resolves when feedback playback completes. The session never
/// issues overlapping activations of one signal. Feedback is treated as
/// reliable, so there is no error path.
#[async_trait]
pub trait SignalSource: Send + Sync {
    /// Mark the signal active, play its sound at `intensity`, return to idle
    async fn activate(&self, signal: SignalId, intensity: Intensity);

    /// Play the distinct mistake cue
    async fn failure_cue(&self);
}

/// Artificial pacing delays between signals
#[async_trait]
pub trait Pacer: Send + Sync {
    async fn pause(&self, duration: Duration);
}

/// Production pacer backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Presentation of session state (score, player name, phase)
pub trait SessionPresenter: Send + Sync {
    fn show_player(&self, name: &str);

    fn show_score(&self, score: &ScoreDisplay);

    fn phase_changed(&self, _phase: SessionPhase) {}
}

/// Presenter that renders nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpPresenter;

impl SessionPresenter for NoOpPresenter {
    fn show_player(&self, _name: &str) {}

    fn show_score(&self, _score: &ScoreDisplay) {}
}

/// Read access to the logged-in player's name
///
/// Written by the login flow, read-only to the session.
pub trait IdentityProvider: Send + Sync {
    /// `None` when nobody has logged in
    fn player_name(&self) -> Option<String>;
}

/// Source of the date stamped on score records
pub trait DateSource: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date from the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDateSource;

impl DateSource for SystemDateSource {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Submit-and-fetch ranked scores (Driven Port)
///
/// Implemented by the remote HTTP store, the local cache, and the fallback
/// adapter combining both.
#[async_trait]
pub trait RankedScores: Send + Sync {
    /// Persist a finished game's record; returns the resulting ranked list
    async fn submit(&self, record: &ScoreRecord) -> Result<Leaderboard, StoreError>;

    /// Current ranked list
    async fn fetch(&self) -> Result<Leaderboard, StoreError>;
}

/// Key-value cache holding the single global leaderboard
pub trait LeaderboardCache: Send + Sync {
    /// `Ok(None)` when nothing has been cached yet
    fn load(&self) -> Result<Option<Leaderboard>, StoreError>;

    /// Overwrite the cached list
    fn store(&self, board: &Leaderboard) -> Result<(), StoreError>;
}
