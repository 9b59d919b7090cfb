//! Error types for SwissForge

use thiserror::Error;

use crate::model::CompetitorId;

/// Failure of a single round's pairing computation.
///
/// Every variant aborts the round. The engine is deterministic for a given
/// snapshot, so none of these are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairingError {
    /// The pool cannot be evenly paired.
    #[error("Odd player count: {pool_size} competitors cannot be evenly paired")]
    OddPlayerCount { pool_size: usize },

    /// A pooled competitor has no remaining legal opponent.
    #[error("Dead end: competitor {competitor} has no valid opponent left")]
    DeadEndPairing { competitor: CompetitorId },

    /// Referenced id is absent from the active pool or the standings.
    #[error("Competitor {0} not found")]
    PlayerNotFound(CompetitorId),

    /// An id was committed twice within one round.
    #[error("Competitor {0} was paired twice in one round")]
    DuplicatePairingAttempt(CompetitorId),

    /// A result pairs two competitors who have already played.
    #[error("Competitors {0} and {1} have already played each other")]
    Rematch(CompetitorId, CompetitorId),

    /// The standings list the same id more than once.
    #[error("Competitor {0} appears more than once in the standings")]
    DuplicateCompetitor(CompetitorId),
}

/// Main error type for SwissForge operations
#[derive(Debug, Error)]
pub enum SwissForgeError {
    /// Pairing computation failed
    #[error(transparent)]
    Pairing(#[from] PairingError),

    /// Error reported by the storage layer
    #[error("Storage error: {0}")]
    Storage(String),

    /// Error in pairing configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid operation for current tournament state
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Result type alias for SwissForge operations
pub type Result<T> = std::result::Result<T, SwissForgeError>;
