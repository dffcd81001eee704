//! Configuration file loading for quorum-chain
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. `QUORUM_CHAIN_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./quorum-chain.toml` or `./.quorum-chain.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/quorum-chain/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileNetworkConfig, FileStorageConfig, MAX_CONFIDENCE_SCORE};
pub use loader::{ConfigLoader, ENV_PREFIX};
