//! Summary of one processing run

use serde::{Deserialize, Serialize};

/// What a processing run did to the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSummary {
    /// Nominal height of the first candidate
    pub start_height: u64,
    /// Chain height before the run
    pub initial_height: u64,
    /// Chain height after the run (last accepted height)
    pub final_height: u64,
    pub accepted: usize,
    pub rejected: usize,
}

impl ProcessSummary {
    pub fn new(
        start_height: u64,
        initial_height: u64,
        final_height: u64,
        accepted: usize,
        rejected: usize,
    ) -> Self {
        Self {
            start_height,
            initial_height,
            final_height,
            accepted,
            rejected,
        }
    }

    /// Number of candidates that went through a round
    pub fn candidates(&self) -> usize {
        self.accepted + self.rejected
    }
}
