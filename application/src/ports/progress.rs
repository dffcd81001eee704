//! Progress notification port
//!
//! Defines the interface for reporting progress while candidate blocks are
//! processed. Per-round outcomes are observability output only; the run's
//! result is the final height returned by the use case.

use chain_domain::{Candidate, ProcessSummary, RoundOutcome};

/// Callback for progress updates during block processing
///
/// Implementations live in the presentation and infrastructure layers
/// (console progress, JSONL round log, ...).
pub trait RoundProgressNotifier: Send + Sync {
    /// Called once before the first round with the number of candidates
    fn on_run_start(&self, _total_candidates: usize) {}

    /// Called when a round starts for `candidate` (`index` is 0-based)
    fn on_round_start(&self, candidate: &Candidate, index: usize, total: usize);

    /// Called when a round is decided. `chain_height` is the height after
    /// the candidate was appended or dropped.
    fn on_round_complete(&self, candidate: &Candidate, outcome: &RoundOutcome, chain_height: u64);

    /// Called once the chain has been persisted
    fn on_run_complete(&self, _summary: &ProcessSummary) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl RoundProgressNotifier for NoProgress {
    fn on_round_start(&self, _candidate: &Candidate, _index: usize, _total: usize) {}
    fn on_round_complete(&self, _candidate: &Candidate, _outcome: &RoundOutcome, _height: u64) {}
}
