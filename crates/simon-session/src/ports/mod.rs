//! Ports Layer
//!
//! Defines the interfaces (traits) for:
//! - Driving Ports (inbound) - API for the presentation adapter
//! - Driven Ports (outbound) - Signal source, pacing, presentation, identity, score store

pub mod inbound;
pub mod outbound;

pub use inbound::{GameSessionApi, LeaderboardApi, PressOutcome};
pub use outbound::{
    DateSource, IdentityProvider, LeaderboardCache, NoOpPresenter, Pacer, RankedScores,
    SessionPresenter, SignalSource, SystemDateSource, TokioPacer,
};
