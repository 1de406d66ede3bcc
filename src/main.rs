//! ringcache CLI entry point

use clap::Parser;
use console::style;
use ringcache::cli::{Cli, Commands};
use ringcache::config::ConfigManager;
use ringcache::error::RingResult;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> RingResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("ringcache=warn"),
        1 => EnvFilter::new("ringcache=info"),
        _ => EnvFilter::new("ringcache=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };
    let config = manager.load().await?;

    let cache_root = match cli.cache_dir {
        Some(dir) => dir,
        None => ConfigManager::cache_root()?,
    };

    match cli.command {
        Commands::Render(args) => ringcache::cli::commands::render(args, &config, cache_root).await,
        Commands::Purge => ringcache::cli::commands::purge(cache_root).await,
        Commands::Config(args) => ringcache::cli::commands::config(args, &manager, &config),
    }
}
