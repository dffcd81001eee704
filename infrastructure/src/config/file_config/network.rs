//! Network configuration from TOML (`[network]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [network]
//! total_nodes = 5            # workers dispatched per round
//! min_vote_req = 3           # quorum, at least 3
//! min_confidence_score = 5   # 1..=10
//! latency_ms = 1000          # per-worker latency
//! timeout_ms = 3000          # round timeout
//! ```

use chain_domain::{ConfigError, RoundConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Highest confidence score a node can assign to a block
pub const MAX_CONFIDENCE_SCORE: u8 = 10;

/// Raw network configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNetworkConfig {
    /// Number of node workers spun up per round
    pub total_nodes: usize,
    /// Accepting opinions required to accept a block
    pub min_vote_req: usize,
    /// Minimum confidence score for a node to accept a block
    pub min_confidence_score: u8,
    /// Time each node sleeps before voting
    pub latency_ms: u64,
    /// Time the processor waits for a quorum before dropping a block
    pub timeout_ms: u64,
}

impl Default for FileNetworkConfig {
    fn default() -> Self {
        Self {
            total_nodes: 5,
            min_vote_req: 3,
            min_confidence_score: 5,
            latency_ms: 1000,
            timeout_ms: 3000,
        }
    }
}

impl FileNetworkConfig {
    /// Build the validated round configuration
    pub fn to_round_config(&self) -> Result<RoundConfig, ConfigError> {
        RoundConfig::new(
            self.total_nodes,
            self.min_vote_req,
            Duration::from_millis(self.latency_ms),
            Duration::from_millis(self.timeout_ms),
        )
    }

    /// Validated confidence threshold for the random vote policy
    pub fn confidence_threshold(&self) -> Result<u8, ConfigError> {
        if self.min_confidence_score == 0 || self.min_confidence_score > MAX_CONFIDENCE_SCORE {
            return Err(ConfigError::ConfidenceScoreOutOfRange(
                self.min_confidence_score,
            ));
        }
        Ok(self.min_confidence_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_config_default_is_valid() {
        let config = FileNetworkConfig::default();
        let round = config.to_round_config().unwrap();
        assert_eq!(round.worker_count(), 5);
        assert_eq!(round.quorum(), 3);
        assert_eq!(round.round_timeout(), Duration::from_secs(3));
        assert_eq!(config.confidence_threshold(), Ok(5));
    }

    #[test]
    fn test_network_config_deserialize() {
        let toml_str = r#"
[network]
total_nodes = 7
min_vote_req = 4
latency_ms = 20
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.network.total_nodes, 7);
        assert_eq!(config.network.min_vote_req, 4);
        assert_eq!(config.network.latency_ms, 20);
        // Defaults should apply
        assert_eq!(config.network.timeout_ms, 3000);
    }

    #[test]
    fn test_quorum_above_total_nodes() {
        let config = FileNetworkConfig {
            total_nodes: 3,
            min_vote_req: 4,
            ..Default::default()
        };
        assert_eq!(
            config.to_round_config(),
            Err(ConfigError::QuorumExceedsWorkers {
                quorum: 4,
                workers: 3
            })
        );
    }

    #[test]
    fn test_confidence_score_bounds() {
        let mut config = FileNetworkConfig::default();

        config.min_confidence_score = 0;
        assert_eq!(
            config.confidence_threshold(),
            Err(ConfigError::ConfidenceScoreOutOfRange(0))
        );

        config.min_confidence_score = 11;
        assert!(config.confidence_threshold().is_err());

        config.min_confidence_score = 10;
        assert_eq!(config.confidence_threshold(), Ok(10));
    }
}
