//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// ringcache - disk-memoized SVG progress rings
///
/// Renders circular progress indicators as SVG and caches them on disk
/// keyed by color and percentage.
#[derive(Parser, Debug)]
#[command(name = "ringcache")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "RINGCACHE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Cache root directory (defaults to the platform user cache dir)
    #[arg(long, global = true, env = "RINGCACHE_DIR")]
    pub cache_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render (or reuse) a progress asset and print its path
    Render(RenderArgs),

    /// Remove every cached asset
    Purge,

    /// Show configuration
    Config(ConfigArgs),
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Progress percentage, clamped to [0-100]
    #[arg(short, long)]
    pub progress: f64,

    /// Progress color as a hex token, with or without a leading `#`
    /// (defaults to the configured color)
    #[arg(long)]
    pub color: Option<String>,

    /// Draw a drop shadow under the progress arc
    #[arg(long)]
    pub shadow: bool,

    /// Use rounded line caps on both arcs
    #[arg(long)]
    pub rounded: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Config action to perform
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the config file path
    Path,
}
