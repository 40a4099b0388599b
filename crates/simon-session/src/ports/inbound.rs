//! Inbound Ports (Driving Ports)
//!
//! The API the presentation adapter uses to drive a game and read the
//! leaderboard.

use async_trait::async_trait;

use crate::domain::{LeaderboardView, ScoreRecord, SessionPhase, SignalId};
use crate::error::SessionError;

/// Result of delivering one press to the session
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// The gate was closed; nothing changed
    Ignored,
    /// Matched mid-sequence; `cursor` is the next position to match
    Correct { cursor: usize },
    /// Matched the last signal; the sequence grew and was replayed
    RoundAdvanced { score: u32 },
    /// Mismatch; the game ended with this record and a new game was set up
    Mistake { record: ScoreRecord },
}

/// Game session API (Driving Port)
#[async_trait]
pub trait GameSessionApi: Send {
    /// Start a new game. Only honoured while idle or awaiting input;
    /// returns whether a new game was started.
    async fn restart(&mut self) -> Result<bool, SessionError>;

    /// Deliver one player press
    async fn press(&mut self, signal: SignalId) -> Result<PressOutcome, SessionError>;

    fn phase(&self) -> SessionPhase;

    /// The input gate
    fn input_enabled(&self) -> bool {
        self.phase().input_enabled()
    }
}

/// Leaderboard read API (Driving Port)
///
/// Never fails: an unreachable store degrades to cached or empty data.
#[async_trait]
pub trait LeaderboardApi: Send + Sync {
    async fn load_leaderboard(&self) -> LeaderboardView;
}
