//! Integration flows

pub mod game_flow;
pub mod leaderboard;
