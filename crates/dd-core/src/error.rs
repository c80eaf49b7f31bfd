//! Error types for the duel engine.

/// Errors that can occur when setting up a match.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DuelError {
    /// The target score must be positive.
    #[error("invalid target score: {0} (must be greater than zero)")]
    InvalidTargetScore(u32),

    /// A die value outside 1-6.
    #[error("invalid die value: {0} (must be between 1 and 6)")]
    InvalidDie(u8),
}

/// Convenience result type for engine operations.
pub type DuelResult<T> = Result<T, DuelError>;
