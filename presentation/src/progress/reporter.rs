//! Progress reporting for block processing

use chain_application::RoundProgressNotifier;
use chain_domain::{Candidate, ProcessSummary, RoundOutcome};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress across all rounds with a progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn run_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn outcome_marker(outcome: &RoundOutcome) -> String {
        match outcome {
            RoundOutcome::Accepted { .. } => "v".green().to_string(),
            RoundOutcome::Rejected { .. } => "x".red().to_string(),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundProgressNotifier for ProgressReporter {
    fn on_run_start(&self, total_candidates: usize) {
        let pb = ProgressBar::new(total_candidates as u64);
        pb.set_style(Self::run_style());
        pb.set_prefix("Processing blocks");
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_round_start(&self, candidate: &Candidate, _index: usize, _total: usize) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            pb.set_message(format!("voting on {} at height {}", candidate.id, candidate.height));
        }
    }

    fn on_round_complete(&self, candidate: &Candidate, outcome: &RoundOutcome, chain_height: u64) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            pb.set_message(format!(
                "{} {} (chain height {})",
                Self::outcome_marker(outcome),
                candidate.id,
                chain_height
            ));
            pb.inc(1);
        }
    }

    fn on_run_complete(&self, summary: &ProcessSummary) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_with_message(format!(
                "{} {} accepted, {} rejected",
                "complete!".green(),
                summary.accepted,
                summary.rejected
            ));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl RoundProgressNotifier for SimpleProgress {
    fn on_run_start(&self, total_candidates: usize) {
        println!(
            "{} {} ({} candidates)",
            "->".cyan(),
            "Processing blocks".bold(),
            total_candidates
        );
    }

    fn on_round_start(&self, candidate: &Candidate, index: usize, total: usize) {
        println!(
            "  [{}/{}] block {} at height {}",
            index + 1,
            total,
            candidate.id,
            candidate.height
        );
    }

    fn on_round_complete(&self, candidate: &Candidate, outcome: &RoundOutcome, chain_height: u64) {
        match outcome {
            RoundOutcome::Accepted { accepted } => println!(
                "  {} {} accepted with {} votes, chain height {}",
                "v".green(),
                candidate.id,
                accepted,
                chain_height
            ),
            RoundOutcome::Rejected { accepted, total } => println!(
                "  {} {} invalidated ({}/{} votes)",
                "x".red(),
                candidate.id,
                accepted,
                total
            ),
        }
    }
}
