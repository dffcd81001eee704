//! Run Round use case
//!
//! Orchestrates one voting round for one candidate block.
//!
//! ```text
//!                    ┌─────────────┐
//!  run(candidate) ──▶│ Dispatching │── spawn N workers ──┐
//!                    └─────────────┘                     ▼
//!                                              ┌──────────────────┐
//!                     quorum signal ─────────▶ │ AwaitingOutcome  │ ◀── deadline
//!                                              └──────────────────┘
//!                                                 │            │
//!                                              Accepted     Rejected ──▶ Done
//! ```
//!
//! Workers are detached tasks. Once the round is decided the controller
//! returns immediately; workers still in flight finish in the background and
//! their tally updates no longer matter.

pub mod signal;
pub mod tally;
pub mod worker;

use crate::ports::vote_decision::VoteDecision;
use chain_domain::{Candidate, RoundConfig, RoundOutcome, RoundState};
use signal::{QuorumReceiver, QuorumSignal};
use std::sync::Arc;
use tally::SharedTally;
use tokio::time::Instant;
use tracing::{debug, info, trace};
use worker::Worker;

/// Controller for a single voting round
///
/// One controller per round: [`RoundController::run`] consumes it.
pub struct RoundController<D: VoteDecision + 'static> {
    config: RoundConfig,
    decision: Arc<D>,
    state: RoundState,
}

impl<D: VoteDecision + 'static> RoundController<D> {
    pub fn new(config: RoundConfig, decision: Arc<D>) -> Self {
        Self {
            config,
            decision,
            state: RoundState::Idle,
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Run the round to completion and return its outcome.
    ///
    /// Returns `Accepted` as soon as a worker brings the accept count to the
    /// quorum; returns `Rejected` once `round_timeout` elapses without that
    /// happening, never earlier.
    pub async fn run(mut self, candidate: &Candidate) -> RoundOutcome {
        self.advance(RoundState::Dispatching);
        let deadline = Instant::now() + self.config.round_timeout();
        let tally = SharedTally::new(self.config.quorum());
        let quorum_rx = self.dispatch(candidate, &tally);

        self.advance(RoundState::AwaitingOutcome);
        let outcome = self.await_outcome(quorum_rx, deadline, &tally).await;

        self.advance(outcome.into());
        self.advance(RoundState::Done);
        outcome
    }

    /// Spawn `worker_count` detached workers wired to one tally and signal
    fn dispatch(&self, candidate: &Candidate, tally: &SharedTally) -> QuorumReceiver {
        let (signal, quorum_rx) = QuorumSignal::channel();

        for instance in 1..=self.config.worker_count() {
            let worker = Worker {
                instance,
                latency: self.config.per_worker_latency(),
                candidate: candidate.clone(),
                decision: Arc::clone(&self.decision),
                tally: tally.clone(),
                signal: Arc::clone(&signal),
            };
            tokio::spawn(worker.run());
        }

        debug!(
            "Dispatched {} workers for block {}",
            self.config.worker_count(),
            candidate.id
        );
        quorum_rx
    }

    /// First of quorum signal or deadline.
    ///
    /// The wait is biased toward the quorum signal: if both are ready in the
    /// same poll, the candidate is accepted.
    async fn await_outcome(
        &self,
        quorum_rx: QuorumReceiver,
        deadline: Instant,
        tally: &SharedTally,
    ) -> RoundOutcome {
        let timer = tokio::time::sleep_until(deadline);
        tokio::pin!(timer);

        let signalled = tokio::select! {
            biased;
            signal = quorum_rx => Some(signal),
            () = &mut timer => None,
        };

        match signalled {
            Some(Ok(accepted)) => return RoundOutcome::Accepted { accepted },
            Some(Err(_)) => {
                // Every worker reported without reaching quorum
                debug!("All workers reported without quorum, waiting for deadline");
                timer.await;
            }
            None => {}
        }

        let snapshot = tally.snapshot();
        info!(
            "Round timed out after {:?} with {}/{} accepting opinions",
            self.config.round_timeout(),
            snapshot.accepted(),
            snapshot.total()
        );
        RoundOutcome::Rejected {
            accepted: snapshot.accepted(),
            total: snapshot.total(),
        }
    }

    fn advance(&mut self, next: RoundState) {
        debug_assert!(
            self.state.can_advance_to(next),
            "illegal round transition {} -> {}",
            self.state,
            next
        );
        trace!("Round state {} -> {}", self.state, next);
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::vote_decision::{AlwaysAccept, AlwaysReject, DecisionError};
    use async_trait::async_trait;
    use chain_domain::BlockId;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Accepts only on the listed (0-based) call numbers
    struct AcceptOnCalls {
        calls: AtomicUsize,
        accept: Vec<usize>,
    }

    impl AcceptOnCalls {
        fn new(accept: Vec<usize>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                accept,
            }
        }
    }

    #[async_trait]
    impl VoteDecision for AcceptOnCalls {
        async fn decide(&self, _candidate: &Candidate) -> Result<bool, DecisionError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.accept.contains(&call))
        }
    }

    struct Failing;

    #[async_trait]
    impl VoteDecision for Failing {
        async fn decide(&self, _candidate: &Candidate) -> Result<bool, DecisionError> {
            Err(DecisionError::Unavailable("offline".to_string()))
        }
    }

    fn config(workers: usize, quorum: usize, latency_ms: u64, timeout_ms: u64) -> RoundConfig {
        RoundConfig::new(
            workers,
            quorum,
            Duration::from_millis(latency_ms),
            Duration::from_millis(timeout_ms),
        )
        .unwrap()
    }

    fn candidate(id: &str) -> Candidate {
        Candidate::new(BlockId::try_new(id).unwrap(), 1)
    }

    #[test]
    fn test_new_controller_is_idle() {
        let controller = RoundController::new(config(5, 3, 1, 10), Arc::new(AlwaysAccept));
        assert_eq!(controller.state(), RoundState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_always_accept_finishes_before_timeout() {
        let timeout = Duration::from_millis(1000);
        let controller = RoundController::new(config(5, 3, 10, 1000), Arc::new(AlwaysAccept));

        let start = Instant::now();
        let outcome = controller.run(&candidate("a")).await;

        assert_eq!(outcome, RoundOutcome::Accepted { accepted: 3 });
        assert!(start.elapsed() < timeout);
    }

    #[tokio::test(start_paused = true)]
    async fn test_always_reject_waits_for_full_timeout() {
        let timeout = Duration::from_millis(500);
        let controller = RoundController::new(config(5, 3, 10, 500), Arc::new(AlwaysReject));

        let start = Instant::now();
        let outcome = controller.run(&candidate("a")).await;

        assert_eq!(
            outcome,
            RoundOutcome::Rejected {
                accepted: 0,
                total: 5
            }
        );
        assert!(start.elapsed() >= timeout);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quorum_on_last_worker() {
        let decision = Arc::new(AcceptOnCalls::new(vec![0, 3, 4]));
        let controller = RoundController::new(config(5, 3, 10, 1000), decision);

        let outcome = controller.run(&candidate("a")).await;
        assert_eq!(outcome, RoundOutcome::Accepted { accepted: 3 });
    }

    #[tokio::test(start_paused = true)]
    async fn test_below_quorum_is_rejected() {
        let decision = Arc::new(AcceptOnCalls::new(vec![1, 2]));
        let controller = RoundController::new(config(5, 3, 10, 200), decision);

        let outcome = controller.run(&candidate("a")).await;
        assert_eq!(
            outcome,
            RoundOutcome::Rejected {
                accepted: 2,
                total: 5
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_policy_degrades_to_reject() {
        let controller = RoundController::new(config(4, 3, 10, 200), Arc::new(Failing));

        let outcome = controller.run(&candidate("a")).await;
        assert_eq!(
            outcome,
            RoundOutcome::Rejected {
                accepted: 0,
                total: 4
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_workers_slower_than_timeout_reject() {
        let controller = RoundController::new(config(5, 3, 300, 100), Arc::new(AlwaysAccept));

        let start = Instant::now();
        let outcome = controller.run(&candidate("a")).await;

        assert_eq!(
            outcome,
            RoundOutcome::Rejected {
                accepted: 0,
                total: 0
            }
        );
        assert!(start.elapsed() >= Duration::from_millis(100));
        assert!(start.elapsed() < Duration::from_millis(300));

        // Late workers finish in the background without disturbing anything
        tokio::time::sleep(Duration::from_millis(500)).await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_many_rounds_with_many_workers() {
        let decision = Arc::new(AlwaysAccept);
        for round in 0..1000 {
            let controller =
                RoundController::new(config(50, 26, 0, 10_000), Arc::clone(&decision));
            let outcome = controller.run(&candidate(&format!("b{}", round))).await;
            assert_eq!(outcome, RoundOutcome::Accepted { accepted: 26 });
        }
    }
}
