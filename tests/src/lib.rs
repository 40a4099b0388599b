//! # Simon Test Suite
//!
//! Cross-module flows that exercise the session, the score stores and the
//! runtime wiring together.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── game_flow.rs     # Full games through GameSession and SessionDriver
//!     └── leaderboard.rs   # Remote/cache fallback and leaderboard reads
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p simon-tests
//! cargo test -p simon-tests integration::leaderboard
//! ```

pub mod integration;
