//! Storage locations from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Input file with `start_height` and `candidate_blocks`
    pub input_file: PathBuf,
    /// Persisted chain (`last_max_accepted_height` and `blocks`)
    pub chain_file: PathBuf,
    /// Optional JSONL log with one line per round
    pub round_log: Option<PathBuf>,
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from("data/input.json"),
            chain_file: PathBuf::from("data/blockchain.json"),
            round_log: None,
        }
    }
}
