//! Purge command - remove every cached asset

use crate::cache::{AssetStore, FsStore, ASSET_EXTENSION};
use crate::error::RingResult;
use std::path::PathBuf;

/// Execute the purge command
pub async fn execute(cache_root: PathBuf) -> RingResult<()> {
    let store = FsStore::open(cache_root).await?;

    let stale = store.purge_stale().await?;
    let removed = store.purge_all(ASSET_EXTENSION).await?;

    println!("Removed {} cached asset(s)", removed + stale);
    Ok(())
}
