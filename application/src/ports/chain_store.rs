//! Chain persistence ports
//!
//! [`ChainStore`] loads the accepted chain before a run and saves it once the
//! whole run has completed. [`InputSource`] supplies the candidate blocks.

use chain_domain::{BlockInput, Chain, ChainError};
use thiserror::Error;

/// Errors reading or writing persisted state
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Malformed data: {0}")]
    Malformed(String),

    #[error("Corrupt chain: {0}")]
    Corrupt(#[from] ChainError),
}

/// Storage for the accepted chain
pub trait ChainStore: Send + Sync {
    /// Load the current chain (genesis-only if nothing was persisted yet)
    fn load(&self) -> Result<Chain, PersistenceError>;

    /// Persist the whole chain, replacing what was stored before
    fn save(&self, chain: &Chain) -> Result<(), PersistenceError>;
}

/// Source of candidate blocks for one run
pub trait InputSource: Send + Sync {
    fn load(&self) -> Result<BlockInput, PersistenceError>;
}
