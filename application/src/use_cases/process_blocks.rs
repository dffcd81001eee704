//! Process Blocks use case
//!
//! Drives the outer sequence: loads the chain and the candidate blocks,
//! validates the input, runs one voting round per candidate strictly in
//! order, and persists the chain once at the end of the run.
//!
//! Rounds never overlap. Round `i + 1` starts only after round `i` has been
//! decided. The reported height is the chain length once any block has been
//! accepted, matching what is persisted as `last_max_accepted_height`.

use crate::ports::chain_store::{ChainStore, InputSource, PersistenceError};
use crate::ports::progress::{NoProgress, RoundProgressNotifier};
use crate::ports::vote_decision::VoteDecision;
use crate::use_cases::run_round::RoundController;
use chain_domain::{Candidate, Chain, ProcessSummary, RoundConfig, RoundOutcome, ValidationError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that abort a processing run
#[derive(Error, Debug)]
pub enum ProcessBlocksError {
    #[error("Invalid input")]
    Validation(#[from] ValidationError),

    #[error("Persistence error")]
    Persistence(#[from] PersistenceError),
}

/// Use case for processing a sequence of candidate blocks
pub struct ProcessBlocksUseCase<D: VoteDecision + 'static> {
    config: RoundConfig,
    decision: Arc<D>,
}

impl<D: VoteDecision + 'static> ProcessBlocksUseCase<D> {
    pub fn new(config: RoundConfig, decision: Arc<D>) -> Self {
        Self { config, decision }
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: &dyn InputSource,
        store: &dyn ChainStore,
    ) -> Result<ProcessSummary, ProcessBlocksError> {
        self.execute_with_progress(input, store, &NoProgress).await
    }

    /// Load, validate, process and persist.
    ///
    /// Any validation or persistence failure aborts the run; nothing is
    /// written unless every round has completed.
    pub async fn execute_with_progress(
        &self,
        input: &dyn InputSource,
        store: &dyn ChainStore,
        progress: &dyn RoundProgressNotifier,
    ) -> Result<ProcessSummary, ProcessBlocksError> {
        let mut chain = store.load()?;
        let initial_height = chain.height();
        info!("Loaded chain at height {}", initial_height);

        let block_input = input.load()?;
        let candidates = block_input.validate(initial_height)?;
        info!(
            "Validated {} candidate blocks starting at height {}",
            candidates.len(),
            block_input.start_height
        );

        let initial_blocks = chain.blocks().len();
        let final_height = self.process_all(&candidates, &mut chain, progress).await;

        store.save(&chain)?;
        info!("Persisted chain at height {}", final_height);

        let accepted = chain.blocks().len() - initial_blocks;
        let summary = ProcessSummary::new(
            block_input.start_height,
            initial_height,
            final_height,
            accepted,
            candidates.len() - accepted,
        );
        progress.on_run_complete(&summary);
        Ok(summary)
    }

    /// Run one round per candidate, in order, appending accepted blocks.
    ///
    /// Returns the chain height (its length once anything was appended)
    /// after the last candidate. An empty sequence leaves the chain and its
    /// height untouched.
    pub async fn process_all(
        &self,
        candidates: &[Candidate],
        chain: &mut Chain,
        progress: &dyn RoundProgressNotifier,
    ) -> u64 {
        progress.on_run_start(candidates.len());

        for (index, candidate) in candidates.iter().enumerate() {
            info!(
                "Processing block {} at height {}",
                candidate.id, candidate.height
            );
            progress.on_round_start(candidate, index, candidates.len());

            let controller = RoundController::new(self.config, Arc::clone(&self.decision));
            let outcome = controller.run(candidate).await;

            match outcome {
                RoundOutcome::Accepted { accepted } => {
                    let height = chain.append(candidate.id.clone());
                    info!(
                        "Valid block. Appended block {} at height {}, chain height {} ({} votes)",
                        candidate.id, candidate.height, height, accepted
                    );
                }
                RoundOutcome::Rejected { accepted, total } => {
                    warn!(
                        "Timeout - waited {:?} for block {}. Block invalidated ({}/{} votes)",
                        self.config.round_timeout(),
                        candidate.id,
                        accepted,
                        total
                    );
                }
            }

            progress.on_round_complete(candidate, &outcome, chain.height());
        }

        chain.height()
    }
}
