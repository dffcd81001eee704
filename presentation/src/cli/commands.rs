//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the run result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Run summary ending with the last accepted height
    #[default]
    Summary,
    /// Only the last accepted height
    Height,
    /// JSON summary
    Json,
}

/// CLI arguments for quorum-chain
///
/// Every flag is optional: with no arguments the processor reads its
/// configuration and input from the default locations.
#[derive(Parser, Debug)]
#[command(name = "quorum-chain")]
#[command(author, version, about = "Block processor - accept candidate blocks by node quorum")]
#[command(long_about = r#"
quorum-chain processes a list of candidate blocks one at a time. For each
block a fixed number of simulated nodes vote concurrently; the block is
appended to the chain if enough nodes accept it before the round times out.

Configuration is loaded from (in priority order):
1. QUORUM_CHAIN_* environment variables (e.g. QUORUM_CHAIN_NETWORK__TOTAL_NODES=7)
2. --config <path>     Explicit config file
3. ./quorum-chain.toml Project-level config
4. ~/.config/quorum-chain/config.toml   Global config

Example:
  quorum-chain
  quorum-chain -v --output height
"#)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["quorum-chain"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Summary);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "quorum-chain",
            "-vv",
            "--quiet",
            "--output",
            "height",
            "--config",
            "chain.toml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert_eq!(cli.output, OutputFormat::Height);
        assert_eq!(cli.config, Some(PathBuf::from("chain.toml")));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
