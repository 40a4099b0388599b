//! Subcommand implementations

pub mod login;
pub mod play;
pub mod scores;
