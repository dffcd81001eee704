//! Application layer for quorum-chain
//!
//! This crate contains the voting round, the block processing use case, and
//! the port definitions for everything the core talks to. It depends only on
//! the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    chain_store::{ChainStore, InputSource, PersistenceError},
    composite_progress::CompositeProgressNotifier,
    progress::{NoProgress, RoundProgressNotifier},
    vote_decision::{AlwaysAccept, AlwaysReject, DecisionError, VoteDecision},
};
pub use use_cases::process_blocks::{ProcessBlocksError, ProcessBlocksUseCase};
pub use use_cases::run_round::{
    RoundController,
    signal::{QuorumReceiver, QuorumSignal},
    tally::SharedTally,
};
