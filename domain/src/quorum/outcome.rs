//! Round outcome and round lifecycle
//!
//! ```text
//! Idle ─▶ Dispatching ─▶ AwaitingOutcome ─┬─▶ Accepted ─┬─▶ Done
//!                                         └─▶ Rejected ─┘
//! ```

use serde::{Deserialize, Serialize};

/// Result of one voting round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RoundOutcome {
    /// Quorum signal arrived before the deadline
    Accepted { accepted: usize },
    /// Deadline elapsed without a quorum signal. Counts are the tally
    /// snapshot at the moment the round was abandoned.
    Rejected { accepted: usize, total: usize },
}

impl RoundOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, RoundOutcome::Accepted { .. })
    }

}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::Accepted { accepted } => write!(f, "Accepted ({} votes)", accepted),
            RoundOutcome::Rejected { accepted, total } => {
                write!(f, "Rejected ({}/{} votes)", accepted, total)
            }
        }
    }
}

/// Lifecycle of a round controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Idle,
    Dispatching,
    AwaitingOutcome,
    Accepted,
    Rejected,
    Done,
}

impl RoundState {
    /// Whether `next` is a legal successor of this state
    pub fn can_advance_to(&self, next: RoundState) -> bool {
        use RoundState::*;
        matches!(
            (self, next),
            (Idle, Dispatching)
                | (Dispatching, AwaitingOutcome)
                | (AwaitingOutcome, Accepted)
                | (AwaitingOutcome, Rejected)
                | (Accepted, Done)
                | (Rejected, Done)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoundState::Idle => "idle",
            RoundState::Dispatching => "dispatching",
            RoundState::AwaitingOutcome => "awaiting_outcome",
            RoundState::Accepted => "accepted",
            RoundState::Rejected => "rejected",
            RoundState::Done => "done",
        }
    }
}

impl From<RoundOutcome> for RoundState {
    fn from(outcome: RoundOutcome) -> Self {
        match outcome {
            RoundOutcome::Accepted { .. } => RoundState::Accepted,
            RoundOutcome::Rejected { .. } => RoundState::Rejected,
        }
    }
}

impl std::fmt::Display for RoundState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_predicates() {
        let accepted = RoundOutcome::Accepted { accepted: 3 };
        let rejected = RoundOutcome::Rejected {
            accepted: 1,
            total: 5,
        };
        assert!(accepted.is_accepted());
        assert!(!rejected.is_accepted());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(
            RoundOutcome::Accepted { accepted: 3 }.to_string(),
            "Accepted (3 votes)"
        );
        assert_eq!(
            RoundOutcome::Rejected {
                accepted: 2,
                total: 5
            }
            .to_string(),
            "Rejected (2/5 votes)"
        );
    }

    #[test]
    fn test_outcome_serializes_with_tag() {
        let json = serde_json::to_value(RoundOutcome::Accepted { accepted: 4 }).unwrap();
        assert_eq!(json["outcome"], "accepted");
        assert_eq!(json["accepted"], 4);
    }

    #[test]
    fn test_legal_transitions() {
        use RoundState::*;
        let path = [Idle, Dispatching, AwaitingOutcome, Rejected, Done];
        for pair in path.windows(2) {
            assert!(pair[0].can_advance_to(pair[1]), "{} -> {}", pair[0], pair[1]);
        }
        assert!(AwaitingOutcome.can_advance_to(Accepted));
    }

    #[test]
    fn test_illegal_transitions() {
        use RoundState::*;
        assert!(!Idle.can_advance_to(AwaitingOutcome));
        assert!(!Dispatching.can_advance_to(Accepted));
        assert!(!Accepted.can_advance_to(Rejected));
        assert!(!Done.can_advance_to(Idle));
    }
}
