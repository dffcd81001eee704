//! Vote decision port
//!
//! Defines the policy a worker consults to cast its opinion on a candidate.
//!
//! # Built-in Implementations
//!
//! - [`AlwaysAccept`] - Every worker accepts
//! - [`AlwaysReject`] - Every worker rejects
//!
//! The randomized confidence-score policy lives in the infrastructure layer.

use async_trait::async_trait;
use chain_domain::Candidate;
use thiserror::Error;

/// Failure inside a decision policy
///
/// Workers never propagate this: a failed decision counts as a reject.
#[derive(Error, Debug)]
pub enum DecisionError {
    #[error("Decision policy unavailable: {0}")]
    Unavailable(String),

    #[error("Decision policy failed: {0}")]
    Failed(String),
}

/// Policy that casts one worker's accept/reject opinion
///
/// Called concurrently by every worker of a round, so implementations must
/// not rely on exclusive access to shared state.
#[async_trait]
pub trait VoteDecision: Send + Sync {
    /// Return `true` to accept the candidate, `false` to reject it
    async fn decide(&self, candidate: &Candidate) -> Result<bool, DecisionError>;
}

/// Accepts every candidate
pub struct AlwaysAccept;

#[async_trait]
impl VoteDecision for AlwaysAccept {
    async fn decide(&self, _candidate: &Candidate) -> Result<bool, DecisionError> {
        Ok(true)
    }
}

/// Rejects every candidate
pub struct AlwaysReject;

#[async_trait]
impl VoteDecision for AlwaysReject {
    async fn decide(&self, _candidate: &Candidate) -> Result<bool, DecisionError> {
        Ok(false)
    }
}
