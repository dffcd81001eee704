//! Infrastructure layer for quorum-chain
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: configuration loading, JSON file stores, the random
//! vote policy and the JSONL round log.

pub mod config;
pub mod decision;
pub mod logging;
pub mod storage;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileNetworkConfig, FileStorageConfig};
pub use decision::ConfidenceScoreDecision;
pub use logging::JsonlRoundLogger;
pub use storage::{JsonChainStore, JsonInputSource};
