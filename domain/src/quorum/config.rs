//! Round configuration
//!
//! A [`RoundConfig`] can only be built through [`RoundConfig::new`], which
//! enforces `3 <= quorum <= worker_count` and a non-zero round timeout.

use crate::core::error::ConfigError;
use std::time::Duration;

/// Smallest quorum that is considered meaningful
pub const MIN_QUORUM: usize = 3;

/// Parameters shared by every round of a processing run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    worker_count: usize,
    quorum: usize,
    per_worker_latency: Duration,
    round_timeout: Duration,
}

impl RoundConfig {
    pub fn new(
        worker_count: usize,
        quorum: usize,
        per_worker_latency: Duration,
        round_timeout: Duration,
    ) -> Result<Self, ConfigError> {
        if quorum > worker_count {
            return Err(ConfigError::QuorumExceedsWorkers {
                quorum,
                workers: worker_count,
            });
        }
        if quorum < MIN_QUORUM {
            return Err(ConfigError::QuorumTooSmall {
                quorum,
                minimum: MIN_QUORUM,
            });
        }
        if round_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            worker_count,
            quorum,
            per_worker_latency,
            round_timeout,
        })
    }

    /// Number of workers dispatched per round
    pub fn worker_count(&self) -> usize {
        self.worker_count
    }

    /// Accept opinions required to accept a candidate
    pub fn quorum(&self) -> usize {
        self.quorum
    }

    pub fn per_worker_latency(&self) -> Duration {
        self.per_worker_latency
    }

    pub fn round_timeout(&self) -> Duration {
        self.round_timeout
    }
}

impl std::fmt::Display for RoundConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} of {} workers within {:?} (latency {:?})",
            self.quorum, self.worker_count, self.round_timeout, self.per_worker_latency
        )
    }
}
