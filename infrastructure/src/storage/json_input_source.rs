//! Candidate blocks read from a JSON file.
//!
//! ```json
//! { "start_height": 1, "candidate_blocks": ["b1", "b2"] }
//! ```

use super::{io_error, malformed};
use chain_application::{InputSource, PersistenceError};
use chain_domain::BlockInput;
use std::path::PathBuf;
use tracing::debug;

/// [`InputSource`] backed by a JSON file
pub struct JsonInputSource {
    path: PathBuf,
}

impl JsonInputSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl InputSource for JsonInputSource {
    fn load(&self) -> Result<BlockInput, PersistenceError> {
        debug!("Loading candidate blocks from {}", self.path.display());
        let content = std::fs::read_to_string(&self.path).map_err(|e| io_error(&self.path, e))?;
        serde_json::from_str(&content).map_err(|e| malformed(&self.path, e))
    }
}
