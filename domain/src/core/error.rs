//! Domain error types
//!
//! Both categories here are fatal: they are raised before any voting round
//! runs and abort the whole processing run.

use thiserror::Error;

/// Invalid network/round configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Minimum votes required cannot be lesser than {minimum} (got {quorum})")]
    QuorumTooSmall { quorum: usize, minimum: usize },

    #[error(
        "Minimum votes required ({quorum}) cannot be greater than the total nodes in the network ({workers})"
    )]
    QuorumExceedsWorkers { quorum: usize, workers: usize },

    #[error("Round timeout must be greater than zero")]
    ZeroTimeout,

    #[error("Block confidence score must be between 1 and 10 (got {0})")]
    ConfidenceScoreOutOfRange(u8),

    #[error("Malformed configuration: {0}")]
    Malformed(String),
}

/// Invalid block input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Start height 0 corresponds to the already created genesis block")]
    GenesisHeight,

    #[error("Start height must be last_max_accepted_height + 1 (expected {expected}, got {actual})")]
    StartHeightMismatch { expected: u64, actual: u64 },

    #[error("Empty block ID at candidate index {index}")]
    BlankBlockId { index: usize },
}

/// Structural inconsistency in a persisted chain
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("Chain has no genesis block")]
    Empty,

    #[error("Chain height {height} does not match its {blocks} blocks")]
    HeightMismatch { height: u64, blocks: usize },

    #[error("Chain contains an empty block ID at position {0}")]
    BlankBlockId(usize),
}
