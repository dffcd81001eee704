//! Opinion tally for a single voting round
//!
//! The tally itself is a plain value; the application layer wraps it in a
//! mutex so that the read-then-increment in [`Tally::record_opinion`] is a
//! single critical section.

/// Result of recording one opinion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TallyUpdate {
    /// Accept count after this opinion
    pub accepted: usize,
    /// Total opinions after this opinion
    pub total: usize,
    /// True only for the opinion whose increment made `accepted == quorum`
    pub reached_quorum_now: bool,
}

/// Accept/total opinion counters for the current round
///
/// # Example
///
/// ```
/// use chain_domain::quorum::Tally;
///
/// let mut tally = Tally::new(2);
/// assert!(!tally.record_opinion(true).reached_quorum_now);
/// assert!(!tally.record_opinion(false).reached_quorum_now);
/// assert!(tally.record_opinion(true).reached_quorum_now);
/// assert!(!tally.record_opinion(true).reached_quorum_now);
/// assert_eq!(tally.accepted(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    quorum: usize,
    total: usize,
    accepted: usize,
}

impl Tally {
    /// A fresh `{0, 0}` tally for a round requiring `quorum` accepts
    pub fn new(quorum: usize) -> Self {
        Self {
            quorum,
            total: 0,
            accepted: 0,
        }
    }

    pub fn record_opinion(&mut self, accepted: bool) -> TallyUpdate {
        self.total += 1;
        let mut reached_quorum_now = false;
        if accepted {
            self.accepted += 1;
            reached_quorum_now = self.accepted == self.quorum;
        }

        TallyUpdate {
            accepted: self.accepted,
            total: self.total,
            reached_quorum_now,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn accepted(&self) -> usize {
        self.accepted
    }
}
