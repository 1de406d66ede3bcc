//! Render command - produce (or reuse) a progress asset

use crate::cache::{FsStore, ProgressCache, RenderStyle};
use crate::cli::args::RenderArgs;
use crate::config::Config;
use crate::error::RingResult;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Execute the render command
pub async fn execute(args: RenderArgs, config: &Config, cache_root: PathBuf) -> RingResult<()> {
    let store = Arc::new(FsStore::open(cache_root).await?);

    let style = RenderStyle {
        shadow: args.shadow || config.visual.shadow,
        rounded: args.rounded || config.visual.rounded,
    };
    let cache = ProgressCache::new(store, style);

    // Best effort: a one-shot invocation may exit before this finishes.
    let _bootstrap = cache.spawn_bootstrap();

    let color = args.color.as_deref().unwrap_or(&config.visual.color);
    debug!("Rendering progress {} with color {color}", args.progress);

    let path = cache.progress_asset(color, args.progress).await?;
    println!("{}", path.display());

    Ok(())
}
