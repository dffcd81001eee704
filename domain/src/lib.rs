//! Domain layer for quorum-chain
//!
//! This crate contains the core business types: blocks, the accepted chain,
//! the per-round tally and the round rules. It has no dependencies on async
//! runtimes, I/O, or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Candidate**: a block identifier awaiting an accept/reject decision
//! - **Round**: the bounded-time collection of worker opinions for one candidate
//! - **Tally**: accept/total opinion counters for the current round
//! - **Quorum**: minimum number of accepting opinions required to accept a block
//! - **Chain**: the ordered accepted blocks plus its height, starting at genesis

pub mod block;
pub mod chain;
pub mod core;
pub mod quorum;

// Re-export commonly used types
pub use block::{candidate::Candidate, id::BlockId, input::BlockInput};
pub use chain::{Chain, GENESIS_BLOCK_ID, ProcessSummary};
pub use core::error::{ChainError, ConfigError, ValidationError};
pub use quorum::{MIN_QUORUM, RoundConfig, RoundOutcome, RoundState, Tally, TallyUpdate};
