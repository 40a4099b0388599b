//! # Session Phases
//!
//! The turn-taking state machine of a game session. The input gate is a
//! function of the phase, not a separate flag: presses are accepted only in
//! [`SessionPhase::AwaitingPlayerInput`].
//!
//! ```text
//! [Idle] ──start──→ [Resetting] ──→ [PlayingBack] ──→ [AwaitingPlayerInput]
//!                       ↑  ↑               ↑                │         │
//!                       │  │               │              press    restart
//!                       │  │               │                ↓         │
//!                       │  │        [RoundAdvance] ←─── [ValidatingInput]
//!                       │  │          (full match)       │      │ (match, mid-sequence:
//!                       │  │                   (mismatch)│      │  back to AwaitingPlayerInput)
//!                       │  └────────── [RoundEnd] ←──────┘      │
//!                       └───────────────────────────────────────┴── restart
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SessionError;

/// Current phase of a game session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// Constructed, no game started yet
    Idle,
    /// Clearing state and playing the intro animation
    Resetting,
    /// Machine replays the full sequence
    PlayingBack,
    /// Gate open, waiting for one press
    AwaitingPlayerInput,
    /// A press was accepted and is being checked
    ValidatingInput,
    /// The full sequence was reproduced; extending and replaying
    RoundAdvance,
    /// A mismatch ended the game; committing the score
    RoundEnd,
}

impl SessionPhase {
    /// Whether the transition `self -> next` is legal
    pub fn can_transition_to(self, next: SessionPhase) -> bool {
        use SessionPhase::*;
        matches!(
            (self, next),
            (Idle, Resetting)
                | (Resetting, PlayingBack)
                | (PlayingBack, AwaitingPlayerInput)
                | (AwaitingPlayerInput, ValidatingInput)
                | (AwaitingPlayerInput, Resetting)
                | (ValidatingInput, AwaitingPlayerInput)
                | (ValidatingInput, RoundAdvance)
                | (ValidatingInput, RoundEnd)
                | (RoundAdvance, PlayingBack)
                | (RoundEnd, Resetting)
        )
    }

    /// Checked transition
    pub fn transition(self, next: SessionPhase) -> Result<SessionPhase, SessionError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(SessionError::InvalidTransition {
                from: self,
                to: next,
            })
        }
    }

    /// The input gate: open only while awaiting player input
    pub fn input_enabled(self) -> bool {
        self == SessionPhase::AwaitingPlayerInput
    }

    /// Phases a restart request may interrupt
    pub fn accepts_restart(self) -> bool {
        matches!(self, SessionPhase::Idle | SessionPhase::AwaitingPlayerInput)
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionPhase::Idle => "idle",
            SessionPhase::Resetting => "resetting",
            SessionPhase::PlayingBack => "playing back",
            SessionPhase::AwaitingPlayerInput => "your turn",
            SessionPhase::ValidatingInput => "checking",
            SessionPhase::RoundAdvance => "round complete",
            SessionPhase::RoundEnd => "game over",
        };
        f.write_str(name)
    }
}
