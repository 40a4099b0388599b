//! Domain Layer - Pure game logic
//!
//! This layer contains:
//! - Signals and the signal bank
//! - The sequence and its random generator
//! - Session phases and legal transitions
//! - Score records and the ranked leaderboard
//! - Session configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod config;
pub mod phase;
pub mod score;
pub mod sequence;
pub mod signal;

pub use config::{SessionConfig, SessionConfigBuilder, DEFAULT_PLAYER_NAME};
pub use phase::SessionPhase;
pub use score::{
    format_score_date, Leaderboard, LeaderboardRow, LeaderboardView, ScoreDisplay, ScoreRecord,
    DEFAULT_LEADERBOARD_CAPACITY, EMPTY_LEADERBOARD_MESSAGE,
};
pub use sequence::{Sequence, SequenceGenerator};
pub use signal::{
    Intensity, SignalBank, SignalDescriptor, SignalId, ACTIVE_LIGHTNESS, IDLE_LIGHTNESS,
};
