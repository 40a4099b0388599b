//! # Simon Runtime
//!
//! Terminal front end for the Simon session crate.
//!
//! ## Modular Structure
//!
//! - `container/` - Layered configuration and the composition root
//! - `adapters/` - Terminal signal pad, status display and line input
//! - `commands/` - `play`, `login` and `scores`
//!
//! ## Startup Sequence
//!
//! 1. Parse command-line flags
//! 2. Load configuration (defaults, file, environment, flags)
//! 3. Build the container (score stores, profile)
//! 4. Dispatch the subcommand

pub mod adapters;
pub mod commands;
pub mod container;

pub use container::{CliOverrides, ConfigError, GameContainer, RuntimeConfig};
