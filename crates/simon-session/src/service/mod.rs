//! Service Layer - Orchestration
//!
//! - `GameSession`: the round state machine, implements `GameSessionApi`
//! - `ScoreKeeper`: record building and fallback-tolerant commits
//! - `SessionDriver`: feeds presentation input into a session

pub mod driver;
pub mod scoring;
pub mod session;

pub use driver::{DriverStats, InputEvent, SessionDriver};
pub use scoring::ScoreKeeper;
pub use session::{GameSession, SessionPorts};
