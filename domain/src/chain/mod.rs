//! The accepted chain
//!
//! A chain always starts with the genesis block. A genesis-only chain sits
//! at height 0; once any block has been accepted, the height is the number
//! of blocks in the chain (genesis included). Persisted chain files use the
//! same convention, so `last_max_accepted_height` is either 0 for a fresh
//! genesis or the block count.

mod summary;

pub use summary::ProcessSummary;

use crate::block::id::{BlockId, is_blank};
use crate::core::error::ChainError;

/// Identifier of the hard-coded genesis block at height 0
pub const GENESIS_BLOCK_ID: &str =
    "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f";

/// Ordered sequence of accepted blocks plus its height (Entity)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    height: u64,
    blocks: Vec<BlockId>,
}

impl Chain {
    /// A chain holding only the genesis block
    pub fn genesis() -> Self {
        Self {
            height: 0,
            blocks: vec![BlockId(GENESIS_BLOCK_ID.to_string())],
        }
    }

    /// Rebuild a chain from persisted parts, checking that the height agrees
    /// with the number of blocks.
    pub fn from_parts(height: u64, blocks: Vec<BlockId>) -> Result<Self, ChainError> {
        if blocks.is_empty() {
            return Err(ChainError::Empty);
        }
        let fresh_genesis = height == 0 && blocks.len() == 1;
        if !fresh_genesis && height != blocks.len() as u64 {
            return Err(ChainError::HeightMismatch {
                height,
                blocks: blocks.len(),
            });
        }
        if let Some(position) = blocks.iter().position(|b| is_blank(b.as_str())) {
            return Err(ChainError::BlankBlockId(position));
        }
        Ok(Self { height, blocks })
    }

    /// Last accepted height, as persisted in `last_max_accepted_height`
    pub fn height(&self) -> u64 {
        self.height
    }

    pub fn blocks(&self) -> &[BlockId] {
        &self.blocks
    }

    /// The most recently accepted block
    pub fn tip(&self) -> &BlockId {
        // `from_parts` and `genesis` guarantee at least one block
        &self.blocks[self.blocks.len() - 1]
    }

    /// Append an accepted block and return the new chain height
    pub fn append(&mut self, id: BlockId) -> u64 {
        self.blocks.push(id);
        self.height = self.blocks.len() as u64;
        self.height
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::genesis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> BlockId {
        BlockId::try_new(s).unwrap()
    }

    #[test]
    fn test_genesis_chain() {
        let chain = Chain::genesis();
        assert_eq!(chain.height(), 0);
        assert_eq!(chain.blocks().len(), 1);
        assert_eq!(chain.tip().as_str(), GENESIS_BLOCK_ID);
    }

    #[test]
    fn test_height_is_chain_length_after_append() {
        let mut chain = Chain::genesis();
        assert_eq!(chain.append(id("a")), 2);
        assert_eq!(chain.append(id("b")), 3);
        assert_eq!(chain.height(), 3);
        assert_eq!(chain.blocks().len(), 3);
        assert_eq!(chain.tip().as_str(), "b");
    }

    #[test]
    fn test_from_parts_accepts_fresh_genesis() {
        let chain = Chain::from_parts(0, vec![id(GENESIS_BLOCK_ID)]).unwrap();
        assert_eq!(chain, Chain::genesis());
    }

    #[test]
    fn test_from_parts_accepts_length_height() {
        let blocks = vec![id(GENESIS_BLOCK_ID), id("a"), id("b")];
        let chain = Chain::from_parts(3, blocks).unwrap();
        assert_eq!(chain.height(), 3);

        // An empty run over a fresh genesis persists height 1
        assert!(Chain::from_parts(1, vec![id(GENESIS_BLOCK_ID)]).is_ok());
    }

    #[test]
    fn test_from_parts_checks_height() {
        let blocks = vec![id(GENESIS_BLOCK_ID), id("a"), id("b")];
        assert_eq!(
            Chain::from_parts(2, blocks),
            Err(ChainError::HeightMismatch {
                height: 2,
                blocks: 3
            })
        );
        assert_eq!(Chain::from_parts(0, vec![]), Err(ChainError::Empty));
    }

    #[test]
    fn test_from_parts_rejects_blank_block() {
        let blocks = vec![id(GENESIS_BLOCK_ID), BlockId(" ".to_string())];
        assert_eq!(
            Chain::from_parts(2, blocks),
            Err(ChainError::BlankBlockId(1))
        );
    }
}
