//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into domain types by the
//! `to_*` helpers, which perform all validation.

mod network;
mod storage;

pub use network::{FileNetworkConfig, MAX_CONFIDENCE_SCORE};
pub use storage::FileStorageConfig;

use chain_domain::{ConfigError, RoundConfig};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Node population and round timing
    pub network: FileNetworkConfig,
    /// Input, chain and round log locations
    pub storage: FileStorageConfig,
}

impl FileConfig {
    /// Validate the entire configuration.
    ///
    /// Returns the round configuration and the confidence threshold, or the
    /// first invalid setting.
    pub fn validate(&self) -> Result<(RoundConfig, u8), ConfigError> {
        let round = self.network.to_round_config()?;
        let threshold = self.network.confidence_threshold()?;
        Ok((round, threshold))
    }
}
