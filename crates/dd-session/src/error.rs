//! Error types for game sessions.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while processing session input.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Unknown command.
    #[error("unknown command: {0} (type 'help' for a list)")]
    UnknownCommand(String),

    /// Invalid choice or input.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// The match has ended; only a new game can be started.
    #[error("the game is over (type 'new' to play again)")]
    MatchOver,

    /// Engine setup error.
    #[error("{0}")]
    Duel(#[from] dd_core::DuelError),

    /// Journal export failed.
    #[error("export failed: {0}")]
    Export(#[from] serde_json::Error),
}
