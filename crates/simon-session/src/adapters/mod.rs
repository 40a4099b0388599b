//! Adapters Layer
//!
//! Implementations of the score store and identity ports:
//! - `HttpScoreStore`: remote score server
//! - `CachedScores`: local merge over a leaderboard cache
//! - `FallbackScores`: remote first, cache on failure
//! - `FileLeaderboardCache` / `FileProfileStore`: JSON files under the data dir
//! - `InMemoryLeaderboardCache`: process memory

pub mod cached;
pub mod fallback;
pub mod file;
pub mod http;
pub mod memory;

pub use cached::CachedScores;
pub use fallback::FallbackScores;
pub use file::{FileLeaderboardCache, FileProfileStore, PROFILE_FILE, SCORES_FILE};
pub use http::HttpScoreStore;
pub use memory::InMemoryLeaderboardCache;
