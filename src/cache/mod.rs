//! Progress-asset cache
//!
//! Deterministically renders circular progress indicators as SVG and
//! memoizes them on disk keyed by `(color, progress)`. An in-memory index,
//! populated by a one-time background scan, short-circuits repeated
//! requests; a direct existence check covers the window before the scan
//! completes.

pub mod index;
pub mod key;
pub mod store;
pub mod svg;

pub use index::CacheIndex;
pub use key::AssetKey;
pub use store::{AssetStore, FsStore, ASSET_EXTENSION, FORMAT_VERSION};
pub use svg::RenderParams;

use crate::config::schema::VisualConfig;
use crate::error::RingResult;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Style switches applied to every asset this cache renders
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderStyle {
    pub shadow: bool,
    pub rounded: bool,
}

impl From<&VisualConfig> for RenderStyle {
    fn from(visual: &VisualConfig) -> Self {
        Self {
            shadow: visual.shadow,
            rounded: visual.rounded,
        }
    }
}

/// The progress-asset cache: store + index + renderer wiring
///
/// Owned by the composition root and shared by reference; no global state.
pub struct ProgressCache {
    store: Arc<dyn AssetStore>,
    index: Arc<CacheIndex>,
    style: RenderStyle,
}

impl ProgressCache {
    /// Create a cache over `store` with an empty, unloaded index
    pub fn new(store: Arc<dyn AssetStore>, style: RenderStyle) -> Self {
        Self {
            store,
            index: Arc::new(CacheIndex::new()),
            style,
        }
    }

    /// Launch the one-time bootstrap task: sweep material from older
    /// format versions, then scan the live directory and load the index
    ///
    /// Fire-and-forget; completion is not required for correctness. If the
    /// scan fails the index stays unloaded and every lookup falls through
    /// to the store.
    pub fn spawn_bootstrap(&self) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        let index = Arc::clone(&self.index);

        tokio::spawn(async move {
            if let Err(e) = store.purge_stale().await {
                warn!("Stale cache sweep failed: {e}");
            }

            match store.enumerate().await {
                Ok(keys) => index.load(keys),
                Err(e) => warn!("Cache bootstrap scan failed: {e}"),
            }
        })
    }

    /// Resolve the asset path for `(color, progress)`, rendering and
    /// persisting on a full miss
    ///
    /// Progress is clamped to `[0, 100]` during key derivation. Errors
    /// propagate to the caller, which is expected to degrade to showing
    /// no indicator.
    pub async fn progress_asset(&self, color: &str, progress: f64) -> RingResult<PathBuf> {
        let key = AssetKey::derive(color, progress);

        if self.index.contains(&key) {
            debug!("Index hit for {key}");
            return Ok(self.store.path_for(&key));
        }

        // The index may not have loaded yet, or its snapshot may predate
        // this asset; the store is authoritative.
        if self.store.exists(&key).await {
            return Ok(self.store.path_for(&key));
        }

        let params = RenderParams::new(color, progress, self.style.shadow, self.style.rounded);
        let bytes = svg::render(&params)?;
        self.store.write(&key, &bytes).await
    }

    /// Remove every persisted asset (manual invalidation)
    pub async fn purge(&self) -> RingResult<usize> {
        self.store.purge_all(ASSET_EXTENSION).await
    }
}
