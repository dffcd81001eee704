//! Block processor input

use super::candidate::Candidate;
use super::id::BlockId;
use crate::core::error::ValidationError;
use serde::{Deserialize, Serialize};

/// Raw input fed to the block processor
///
/// Identifiers are kept as plain strings so that blank entries surface as a
/// [`ValidationError`] rather than a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockInput {
    pub start_height: u64,
    pub candidate_blocks: Vec<String>,
}

impl BlockInput {
    pub fn new(start_height: u64, candidate_blocks: Vec<String>) -> Self {
        Self {
            start_height,
            candidate_blocks,
        }
    }

    /// Validate the input against the current chain height and turn it into
    /// an ordered list of candidates.
    ///
    /// Rules:
    /// 1. `start_height` must not be 0 (reserved for genesis)
    /// 2. `start_height` must equal `chain_height + 1`
    /// 3. no candidate identifier may be blank
    pub fn validate(&self, chain_height: u64) -> Result<Vec<Candidate>, ValidationError> {
        if self.start_height == 0 {
            return Err(ValidationError::GenesisHeight);
        }

        let expected = chain_height + 1;
        if self.start_height != expected {
            return Err(ValidationError::StartHeightMismatch {
                expected,
                actual: self.start_height,
            });
        }

        self.candidate_blocks
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                let id = BlockId::try_new(raw.as_str())
                    .ok_or(ValidationError::BlankBlockId { index })?;
                Ok(Candidate::new(id, self.start_height + index as u64))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(start_height: u64, blocks: &[&str]) -> BlockInput {
        BlockInput::new(start_height, blocks.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_validate_assigns_nominal_heights() {
        let candidates = input(5, &["A", "B", "C"]).validate(4).unwrap();
        let heights: Vec<_> = candidates.iter().map(|c| c.height).collect();
        assert_eq!(heights, vec![5, 6, 7]);
        assert_eq!(candidates[1].id.as_str(), "B");
    }

    #[test]
    fn test_validate_rejects_genesis_height() {
        assert_eq!(
            input(0, &["A"]).validate(0),
            Err(ValidationError::GenesisHeight)
        );
    }

    #[test]
    fn test_validate_rejects_height_gap() {
        assert_eq!(
            input(3, &["A"]).validate(0),
            Err(ValidationError::StartHeightMismatch {
                expected: 1,
                actual: 3
            })
        );
    }

    #[test]
    fn test_validate_rejects_blank_id() {
        assert_eq!(
            input(1, &["A", "  ", "C"]).validate(0),
            Err(ValidationError::BlankBlockId { index: 1 })
        );
    }

    #[test]
    fn test_validate_empty_sequence() {
        assert!(input(1, &[]).validate(0).unwrap().is_empty());
    }

    #[test]
    fn test_deserialize_input() {
        let json = r#"{"start_height": 2, "candidate_blocks": ["x", "y"]}"#;
        let input: BlockInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.start_height, 2);
        assert_eq!(input.candidate_blocks, vec!["x", "y"]);
    }
}
