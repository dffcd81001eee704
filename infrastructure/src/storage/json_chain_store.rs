//! Chain persisted as a single pretty-printed JSON file.
//!
//! ```json
//! {
//!   "last_max_accepted_height": 3,
//!   "blocks": ["<genesis>", "b1", "b2"]
//! }
//! ```
//!
//! The height is 0 for a fresh genesis file and the block count afterwards.

use super::{io_error, malformed};
use chain_application::{ChainStore, PersistenceError};
use chain_domain::{BlockId, Chain};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Serialize, Deserialize)]
struct ChainFile {
    last_max_accepted_height: u64,
    blocks: Vec<BlockId>,
}

/// [`ChainStore`] backed by a JSON file
pub struct JsonChainStore {
    path: PathBuf,
}

impl JsonChainStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the genesis chain if nothing has been persisted yet.
    ///
    /// Returns the chain currently stored.
    pub fn init_genesis(&self) -> Result<Chain, PersistenceError> {
        if self.path.exists() {
            info!("Genesis block already created");
            return self.load();
        }

        info!("Initializing the genesis block at {}", self.path.display());
        let chain = Chain::genesis();
        self.save(&chain)?;
        Ok(chain)
    }
}

impl ChainStore for JsonChainStore {
    fn load(&self) -> Result<Chain, PersistenceError> {
        if !self.path.exists() {
            debug!("No chain at {}, starting from genesis", self.path.display());
            return Ok(Chain::genesis());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| io_error(&self.path, e))?;
        let file: ChainFile = serde_json::from_str(&content).map_err(|e| malformed(&self.path, e))?;
        let chain = Chain::from_parts(file.last_max_accepted_height, file.blocks)?;
        debug!(
            "Loaded chain with {} blocks from {}",
            chain.blocks().len(),
            self.path.display()
        );
        Ok(chain)
    }

    fn save(&self, chain: &Chain) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }

        let file = ChainFile {
            last_max_accepted_height: chain.height(),
            blocks: chain.blocks().to_vec(),
        };
        let json = serde_json::to_string_pretty(&file).map_err(|e| malformed(&self.path, e))?;

        // Write the whole file next to the target, then swap it in
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| io_error(&tmp, e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| io_error(&self.path, e))?;

        debug!(
            "Wrote chain at height {} to {}",
            chain.height(),
            self.path.display()
        );
        Ok(())
    }
}
