//! Error types for the Simon session subsystem

use thiserror::Error;

use crate::domain::{SessionPhase, SignalId};

/// Errors raised by the session state machine
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Unknown signal: {0}")]
    UnknownSignal(SignalId),

    #[error("Invalid phase transition: {from:?} -> {to:?}")]
    InvalidTransition {
        from: SessionPhase,
        to: SessionPhase,
    },

    #[error("Invalid session configuration: {0}")]
    InvalidConfig(String),
}

/// Errors from score store collaborators (remote store, local cache, profile)
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Score server returned status {status}")]
    Status { status: u16 },

    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}
