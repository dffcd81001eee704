//! Composite progress notifier — delegates to multiple notifiers.
//!
//! Used to fan out round events to both the console progress reporter and
//! the JSONL round log simultaneously.

use super::progress::RoundProgressNotifier;
use chain_domain::{Candidate, ProcessSummary, RoundOutcome};

/// A progress notifier that delegates to multiple inner notifiers.
///
/// Uses borrowed references with a lifetime parameter so both owned and
/// borrowed notifiers can be composed without wrapper types.
pub struct CompositeProgressNotifier<'a> {
    delegates: Vec<&'a dyn RoundProgressNotifier>,
}

impl<'a> CompositeProgressNotifier<'a> {
    pub fn new(delegates: Vec<&'a dyn RoundProgressNotifier>) -> Self {
        Self { delegates }
    }

    pub fn push(&mut self, delegate: &'a dyn RoundProgressNotifier) {
        self.delegates.push(delegate);
    }
}

/// Macro to delegate a method call to all inner notifiers.
macro_rules! delegate {
    ($self:ident, $method:ident $(, $arg:expr)*) => {
        for d in &$self.delegates {
            d.$method($($arg),*);
        }
    };
}

impl RoundProgressNotifier for CompositeProgressNotifier<'_> {
    fn on_run_start(&self, total_candidates: usize) {
        delegate!(self, on_run_start, total_candidates);
    }

    fn on_round_start(&self, candidate: &Candidate, index: usize, total: usize) {
        delegate!(self, on_round_start, candidate, index, total);
    }

    fn on_round_complete(&self, candidate: &Candidate, outcome: &RoundOutcome, chain_height: u64) {
        delegate!(self, on_round_complete, candidate, outcome, chain_height);
    }

    fn on_run_complete(&self, summary: &ProcessSummary) {
        delegate!(self, on_run_complete, summary);
    }
}
