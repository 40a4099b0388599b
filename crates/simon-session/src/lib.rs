//! # Simon Session
//!
//! The round logic of a Simon memory game: a growing random sequence of
//! signals is played back, the player reproduces it, and the final score is
//! kept on a ranked leaderboard that survives an unreachable score server.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure game logic, no I/O
//!   - `SignalBank`: The configured signals (classic: green, red, yellow, blue)
//!   - `Sequence` / `SequenceGenerator`: The sequence to memorize
//!   - `SessionPhase`: Phases and legal transitions
//!   - `Leaderboard`: Ranked scores with numeric insertion
//!   - `SessionConfig` / `SessionConfigBuilder`: Timing and capacity settings
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `GameSessionApi`, `LeaderboardApi`: Driving ports
//!   - `SignalSource`, `Pacer`, `SessionPresenter`: Feedback and pacing
//!   - `IdentityProvider`, `DateSource`: Record inputs
//!   - `RankedScores`, `LeaderboardCache`: Score persistence
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `GameSession`: Implements `GameSessionApi`
//!   - `ScoreKeeper`: Implements `LeaderboardApi`
//!   - `SessionDriver`: Input loop with stale-input discard
//!
//! - **Adapters Layer** (`adapters/`): Score stores and identity
//!   - `HttpScoreStore`: Remote ranked list
//!   - `FallbackScores`: Remote first, local cache on failure
//!   - `FileLeaderboardCache` / `FileProfileStore`: JSON files
//!
//! ## Round Flow
//!
//! ```text
//! Idle --restart--> Resetting --> PlayingBack --> AwaitingPlayerInput
//!                      ^                               |  ^
//!                      |                          press|  |correct, more to go
//!                      |                               v  |
//!                   RoundEnd <--mistake------- ValidatingInput
//!                                                      |
//!                                    sequence complete v
//!                        PlayingBack <-------- RoundAdvance
//! ```
//!
//! ## Invariants
//!
//! - Input is accepted only while awaiting player input
//! - The sequence grows by exactly one signal per completed round
//! - The score is the number of completed rounds
//! - The leaderboard is ranked descending by score and holds at most ten entries
//!
//! ## Usage Example
//!
//! ```ignore
//! use simon_session::{
//!     CachedScores, FallbackScores, FileLeaderboardCache, FileProfileStore, GameSession,
//!     HttpScoreStore, ScoreKeeper, SessionConfig, SessionPorts, SystemDateSource, TokioPacer,
//! };
//! use std::sync::Arc;
//!
//! let remote = Arc::new(HttpScoreStore::new("http://localhost:8080")?);
//! let cache = Arc::new(FileLeaderboardCache::in_dir("/tmp/simon"));
//! let scores = FallbackScores::new(remote, CachedScores::new(cache));
//! let keeper = ScoreKeeper::new(
//!     Arc::new(scores),
//!     Arc::new(FileProfileStore::in_dir("/tmp/simon")),
//!     Arc::new(SystemDateSource),
//! );
//!
//! let mut session = GameSession::new(
//!     SessionConfig::default(),
//!     SessionPorts { signals, pacer: Arc::new(TokioPacer), presenter, scores: keeper },
//! )?;
//! session.restart().await?;
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;
pub mod test_utils;

// Re-exports for convenience
pub use domain::{
    format_score_date, Intensity, Leaderboard, LeaderboardRow, LeaderboardView, ScoreDisplay,
    ScoreRecord, Sequence, SequenceGenerator, SessionConfig, SessionConfigBuilder, SessionPhase,
    SignalBank, SignalDescriptor, SignalId, DEFAULT_LEADERBOARD_CAPACITY, DEFAULT_PLAYER_NAME,
    EMPTY_LEADERBOARD_MESSAGE,
};
pub use error::{SessionError, StoreError};
pub use ports::{
    DateSource, GameSessionApi, IdentityProvider, LeaderboardApi, LeaderboardCache,
    NoOpPresenter, Pacer, PressOutcome, RankedScores, SessionPresenter, SignalSource,
    SystemDateSource, TokioPacer,
};
pub use service::{DriverStats, GameSession, InputEvent, ScoreKeeper, SessionDriver, SessionPorts};

pub use adapters::{
    CachedScores, FallbackScores, FileLeaderboardCache, FileProfileStore, HttpScoreStore,
    InMemoryLeaderboardCache, PROFILE_FILE, SCORES_FILE,
};
