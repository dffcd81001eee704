//! A single opinion-casting node

use super::signal::QuorumSignal;
use super::tally::SharedTally;
use crate::ports::vote_decision::VoteDecision;
use chain_domain::{Candidate, TallyUpdate};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// One worker of a round, consumed by [`Worker::run`]
pub struct Worker<D: VoteDecision + 'static> {
    /// 1-based worker number, for logs
    pub instance: usize,
    pub latency: Duration,
    pub candidate: Candidate,
    pub decision: Arc<D>,
    pub tally: SharedTally,
    pub signal: Arc<QuorumSignal>,
}

impl<D: VoteDecision + 'static> Worker<D> {
    /// Sleep, decide, record, and signal if this opinion reached quorum.
    ///
    /// A failing decision is recorded as a reject.
    pub async fn run(self) -> TallyUpdate {
        tokio::time::sleep(self.latency).await;
        debug!(
            "Worker {} voting on block {}",
            self.instance, self.candidate.id
        );

        let opinion = match self.decision.decide(&self.candidate).await {
            Ok(opinion) => opinion,
            Err(e) => {
                warn!(
                    "Worker {} decision failed, counting as reject: {}",
                    self.instance, e
                );
                false
            }
        };

        let update = self.tally.record_opinion(opinion);
        debug!(
            "Worker {} {} block {} ({}/{} accepted)",
            self.instance,
            if opinion { "accepted" } else { "rejected" },
            self.candidate.id,
            update.accepted,
            update.total
        );

        if update.reached_quorum_now {
            info!(
                "Worker {} reached quorum for block {} with {} votes",
                self.instance, self.candidate.id, update.accepted
            );
            if !self.signal.fire(update.accepted) {
                debug!("Quorum signal for block {} was not observed", self.candidate.id);
            }
        }

        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::vote_decision::{AlwaysAccept, DecisionError};
    use async_trait::async_trait;
    use chain_domain::BlockId;

    struct Failing;

    #[async_trait]
    impl VoteDecision for Failing {
        async fn decide(&self, _candidate: &Candidate) -> Result<bool, DecisionError> {
            Err(DecisionError::Failed("boom".to_string()))
        }
    }

    fn worker<D: VoteDecision + 'static>(
        decision: D,
        tally: &SharedTally,
        signal: &Arc<QuorumSignal>,
    ) -> Worker<D> {
        Worker {
            instance: 1,
            latency: Duration::from_millis(5),
            candidate: Candidate::new(BlockId::try_new("b").unwrap(), 1),
            decision: Arc::new(decision),
            tally: tally.clone(),
            signal: Arc::clone(signal),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_decision_counts_as_reject() {
        let tally = SharedTally::new(3);
        let (signal, _rx) = QuorumSignal::channel();

        let update = worker(Failing, &tally, &signal).run().await;
        assert_eq!(update.total, 1);
        assert_eq!(update.accepted, 0);
        assert!(!signal.is_spent());
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_quorum_crossing_worker_fires() {
        let tally = SharedTally::new(3);
        let (signal, rx) = QuorumSignal::channel();

        for _ in 0..2 {
            assert!(!worker(AlwaysAccept, &tally, &signal).run().await.reached_quorum_now);
        }
        assert!(!signal.is_spent());

        assert!(worker(AlwaysAccept, &tally, &signal).run().await.reached_quorum_now);
        assert!(signal.is_spent());
        assert!(!worker(AlwaysAccept, &tally, &signal).run().await.reached_quorum_now);

        assert_eq!(rx.await.unwrap(), 3);
        assert_eq!(tally.snapshot().accepted(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_worker_sleeps_before_voting() {
        let tally = SharedTally::new(3);
        let (signal, _rx) = QuorumSignal::channel();
        let start = tokio::time::Instant::now();

        worker(AlwaysAccept, &tally, &signal).run().await;
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
