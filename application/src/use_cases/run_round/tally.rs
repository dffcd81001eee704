//! Mutex-guarded tally shared by the workers of one round

use chain_domain::{Tally, TallyUpdate};
use std::sync::{Arc, Mutex, PoisonError};

/// Handle to a round's [`Tally`]
///
/// Cloning the handle shares the same counters. The lock is held only for
/// the O(1) read-then-increment and never across an `.await`.
#[derive(Debug, Clone)]
pub struct SharedTally {
    inner: Arc<Mutex<Tally>>,
}

impl SharedTally {
    /// A fresh `{0, 0}` tally
    pub fn new(quorum: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Tally::new(quorum))),
        }
    }

    /// Record one opinion atomically
    pub fn record_opinion(&self, accepted: bool) -> TallyUpdate {
        // Recover from poisoning: the counters are always left consistent
        let mut tally = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        tally.record_opinion(accepted)
    }

    /// Copy of the counters as they are right now
    pub fn snapshot(&self) -> Tally {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
