//! Test doubles for the outbound ports.
//!
//! Used by the unit tests in this crate and by the `simon-tests` suite.

use async_trait::async_trait;
use chrono::NaiveDate;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    Intensity, Leaderboard, ScoreDisplay, ScoreRecord, SessionConfig, SessionConfigBuilder,
    SessionPhase, SignalId,
};
use crate::error::StoreError;
use crate::ports::{
    DateSource, IdentityProvider, Pacer, RankedScores, SessionPresenter, SignalSource,
};

/// Signal source that records every activation and resolves immediately
#[derive(Default)]
pub struct RecordingSignals {
    activations: Mutex<Vec<(SignalId, Intensity)>>,
    failure_cues: AtomicUsize,
}

impl RecordingSignals {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn activations(&self) -> Vec<(SignalId, Intensity)> {
        self.activations.lock().clone()
    }

    /// Activations at full intensity (playback and presses)
    pub fn audible(&self) -> Vec<SignalId> {
        self.activations
            .lock()
            .iter()
            .filter(|(_, i)| !i.is_silent())
            .map(|(id, _)| *id)
            .collect()
    }

    /// Activations at zero intensity (the unified animation)
    pub fn silent_count(&self) -> usize {
        self.activations
            .lock()
            .iter()
            .filter(|(_, i)| i.is_silent())
            .count()
    }

    pub fn failure_cues(&self) -> usize {
        self.failure_cues.load(Ordering::SeqCst)
    }

    pub fn clear(&self) {
        self.activations.lock().clear();
    }
}

#[async_trait]
impl SignalSource for RecordingSignals {
    async fn activate(&self, signal: SignalId, intensity: Intensity) {
        self.activations.lock().push((signal, intensity));
    }

    async fn failure_cue(&self) {
        self.failure_cues.fetch_add(1, Ordering::SeqCst);
    }
}

/// Pacer that records requested pauses without sleeping
#[derive(Default)]
pub struct InstantPacer {
    pauses: Mutex<Vec<Duration>>,
}

impl InstantPacer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().clone()
    }
}

#[async_trait]
impl Pacer for InstantPacer {
    async fn pause(&self, duration: Duration) {
        self.pauses.lock().push(duration);
    }
}

/// Presenter that records everything shown
#[derive(Default)]
pub struct RecordingPresenter {
    players: Mutex<Vec<String>>,
    scores: Mutex<Vec<ScoreDisplay>>,
    phases: Mutex<Vec<SessionPhase>>,
}

impl RecordingPresenter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn players(&self) -> Vec<String> {
        self.players.lock().clone()
    }

    pub fn scores(&self) -> Vec<ScoreDisplay> {
        self.scores.lock().clone()
    }

    pub fn phases(&self) -> Vec<SessionPhase> {
        self.phases.lock().clone()
    }

    pub fn clear_phases(&self) {
        self.phases.lock().clear();
    }
}

impl SessionPresenter for RecordingPresenter {
    fn show_player(&self, name: &str) {
        self.players.lock().push(name.to_string());
    }

    fn show_score(&self, score: &ScoreDisplay) {
        self.scores.lock().push(score.clone());
    }

    fn phase_changed(&self, phase: SessionPhase) {
        self.phases.lock().push(phase);
    }
}

/// Identity provider with a fixed answer
pub struct FixedIdentity(pub Option<String>);

impl FixedIdentity {
    pub fn named(name: &str) -> Arc<Self> {
        Arc::new(Self(Some(name.to_string())))
    }

    pub fn anonymous() -> Arc<Self> {
        Arc::new(Self(None))
    }
}

impl IdentityProvider for FixedIdentity {
    fn player_name(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Date source with a fixed date
pub struct FixedDate(pub NaiveDate);

impl FixedDate {
    pub fn ymd(year: i32, month: u32, day: u32) -> Arc<Self> {
        Arc::new(Self(
            NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        ))
    }
}

impl DateSource for FixedDate {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Remote store that is never reachable
#[derive(Default)]
pub struct UnreachableScores {
    attempts: AtomicUsize,
}

impl UnreachableScores {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RankedScores for UnreachableScores {
    async fn submit(&self, _record: &ScoreRecord) -> Result<Leaderboard, StoreError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Connection("score server unreachable".to_string()))
    }

    async fn fetch(&self) -> Result<Leaderboard, StoreError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Connection("score server unreachable".to_string()))
    }
}

/// Remote store stand-in that answers with a scripted list and records
/// submissions
#[derive(Default)]
pub struct ScriptedScores {
    response: Mutex<Leaderboard>,
    submitted: Mutex<Vec<ScoreRecord>>,
}

impl ScriptedScores {
    pub fn responding(board: Leaderboard) -> Arc<Self> {
        Arc::new(Self {
            response: Mutex::new(board),
            submitted: Mutex::new(Vec::new()),
        })
    }

    pub fn submitted(&self) -> Vec<ScoreRecord> {
        self.submitted.lock().clone()
    }
}

#[async_trait]
impl RankedScores for ScriptedScores {
    async fn submit(&self, record: &ScoreRecord) -> Result<Leaderboard, StoreError> {
        self.submitted.lock().push(record.clone());
        Ok(self.response.lock().clone())
    }

    async fn fetch(&self) -> Result<Leaderboard, StoreError> {
        Ok(self.response.lock().clone())
    }
}

/// Session config with zero pauses, for fast tests
pub fn fast_config() -> SessionConfig {
    SessionConfigBuilder::new()
        .initial_pause_ms(0)
        .inter_signal_pause_ms(0)
        .build()
        .unwrap_or_default()
}

/// Build a record with a fixed date
pub fn make_record(name: &str, score: u32) -> ScoreRecord {
    ScoreRecord {
        name: name.to_string(),
        score,
        date: "10/14/2026".to_string(),
    }
}

/// A signal from the bank that differs from `expected`
pub fn other_than(expected: SignalId, config: &SessionConfig) -> SignalId {
    config
        .signals
        .ids()
        .find(|id| *id != expected)
        .unwrap_or(expected)
}
