//! CLI entrypoint for quorum-chain
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use chain_application::{CompositeProgressNotifier, ProcessBlocksUseCase};
use chain_domain::RoundConfig;
use chain_infrastructure::{
    ConfidenceScoreDecision, ConfigLoader, JsonChainStore, JsonInputSource, JsonlRoundLogger,
};
use chain_presentation::{Cli, ConsoleFormatter, OutputFormat, ProgressReporter, SimpleProgress};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        print_config_sources();
        return Ok(());
    }

    info!("Starting quorum-chain");

    // === Configuration ===
    let config = ConfigLoader::load(cli.config.as_ref()).context("Invalid configuration")?;
    let (round_config, threshold): (RoundConfig, u8) =
        config.validate().context("Invalid configuration")?;
    info!("Network: {}", round_config);

    // === Dependency Injection ===
    let decision = Arc::new(ConfidenceScoreDecision::new(threshold));
    let store = JsonChainStore::new(&config.storage.chain_file);
    let input = JsonInputSource::new(&config.storage.input_file);

    let chain = store
        .init_genesis()
        .with_context(|| format!("Cannot initialize {}", store.path().display()))?;
    info!("Chain file ready at height {}", chain.height());

    let round_log = config
        .storage
        .round_log
        .as_ref()
        .and_then(JsonlRoundLogger::new);

    // Console progress and the optional round log both observe every round
    // Log lines on stderr would tear the progress bar, so verbose runs get plain lines
    let reporter = ProgressReporter::new();
    let simple = SimpleProgress;
    let mut progress = CompositeProgressNotifier::new(Vec::new());
    if !cli.quiet && cli.output == OutputFormat::Summary {
        if cli.verbose > 0 {
            progress.push(&simple);
        } else {
            progress.push(&reporter);
        }
    }
    if let Some(logger) = &round_log {
        progress.push(logger);
    }

    let use_case = ProcessBlocksUseCase::new(round_config, decision);
    let summary = use_case
        .execute_with_progress(&input, &store, &progress)
        .await
        .context("Block processing failed")?;

    let output = match cli.output {
        OutputFormat::Summary => ConsoleFormatter::format(&summary, use_case.config()),
        OutputFormat::Height => ConsoleFormatter::format_height(&summary),
        OutputFormat::Json => ConsoleFormatter::format_json(&summary),
    };

    println!("{}", output);

    Ok(())
}

fn print_config_sources() {
    println!("Configuration sources (in priority order):");
    println!("  [     ] Environment: {}*", chain_infrastructure::config::ENV_PREFIX);

    if let Some(path) = ConfigLoader::project_config_path() {
        println!("  [FOUND] Project: {}", path.display());
    } else {
        println!("  [     ] Project: ./quorum-chain.toml or ./.quorum-chain.toml");
    }

    if let Some(path) = ConfigLoader::global_config_path() {
        let marker = if path.exists() { "FOUND" } else { "     " };
        println!("  [{}] Global:  {}", marker, path.display());
    }

    println!("  [     ] Default: built-in defaults");
}
