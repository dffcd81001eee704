//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod chain_store;
pub mod composite_progress;
pub mod progress;
pub mod vote_decision;
