//! Candidate block value object

use super::id::BlockId;

/// A block awaiting a voting round
///
/// `height` is the nominal target height (start height + index in the input
/// sequence). The height a block is actually appended at depends on how many
/// earlier candidates were accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: BlockId,
    pub height: u64,
}

impl Candidate {
    pub fn new(id: BlockId, height: u64) -> Self {
        Self { id, height }
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.id, self.height)
    }
}
