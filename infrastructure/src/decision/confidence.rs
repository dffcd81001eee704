//! Randomized confidence-score vote policy
//!
//! Each opinion draws a confidence score uniformly from `0..=10`; the node
//! accepts the block when the score reaches the configured threshold.

use crate::config::MAX_CONFIDENCE_SCORE;
use async_trait::async_trait;
use chain_application::{DecisionError, VoteDecision};
use chain_domain::Candidate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// [`VoteDecision`] that accepts when a random confidence score is high enough
///
/// The threshold is taken as already validated by
/// [`FileNetworkConfig::confidence_threshold`](crate::FileNetworkConfig::confidence_threshold).
pub struct ConfidenceScoreDecision {
    threshold: u8,
    rng: Mutex<StdRng>,
}

impl ConfidenceScoreDecision {
    /// Create a policy seeded from OS entropy
    pub fn new(threshold: u8) -> Self {
        Self::with_rng(threshold, StdRng::from_entropy())
    }

    /// Create a reproducible policy
    pub fn with_seed(threshold: u8, seed: u64) -> Self {
        Self::with_rng(threshold, StdRng::seed_from_u64(seed))
    }

    fn with_rng(threshold: u8, rng: StdRng) -> Self {
        Self {
            threshold,
            rng: Mutex::new(rng),
        }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    fn draw_score(&self) -> u8 {
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(0..=MAX_CONFIDENCE_SCORE)
    }
}

#[async_trait]
impl VoteDecision for ConfidenceScoreDecision {
    async fn decide(&self, candidate: &Candidate) -> Result<bool, DecisionError> {
        let score = self.draw_score();
        debug!("Block {} confidence score: {}", candidate.id, score);
        Ok(score >= self.threshold)
    }
}
