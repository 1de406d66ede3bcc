//! Filesystem store for rendered assets
//!
//! Assets live under `<cache root>/v<FORMAT_VERSION>/`, one file per key.
//! The version directory makes renderer-format invalidation unambiguous:
//! bumping [`FORMAT_VERSION`] orphans the old directory, and
//! [`AssetStore::purge_stale`] sweeps orphaned material at startup without
//! ever touching the live directory.

use crate::cache::key::AssetKey;
use crate::error::{RingError, RingResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tracing::{debug, warn};

/// File extension of persisted assets
pub const ASSET_EXTENSION: &str = "svg";

/// Version of the on-disk asset format, bumped whenever the renderer
/// output changes incompatibly
pub const FORMAT_VERSION: u32 = 2;

static TMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Persistence seam for rendered assets
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Deterministic path for a key; no IO
    fn path_for(&self, key: &AssetKey) -> PathBuf;

    /// Direct existence check; the authoritative fallback when the index
    /// reports a miss
    async fn exists(&self, key: &AssetKey) -> bool;

    /// Persist content for a key, creating the directory if needed;
    /// returns the asset path
    async fn write(&self, key: &AssetKey, bytes: &[u8]) -> RingResult<PathBuf>;

    /// Snapshot the keys of all currently persisted assets
    async fn enumerate(&self) -> RingResult<Vec<AssetKey>>;

    /// Remove every persisted asset matching the extension; returns the
    /// number removed
    async fn purge_all(&self, extension: &str) -> RingResult<usize>;

    /// Remove assets left behind by older format versions; returns the
    /// number of entries removed
    async fn purge_stale(&self) -> RingResult<usize>;
}

/// Filesystem-backed asset store
pub struct FsStore {
    root: PathBuf,
    dir: PathBuf,
}

impl FsStore {
    /// Open a store rooted at `root`, creating the current version directory
    pub async fn open(root: impl Into<PathBuf>) -> RingResult<Self> {
        let root = root.into();
        let dir = root.join(format!("v{FORMAT_VERSION}"));

        fs::create_dir_all(&dir)
            .await
            .map_err(|e| RingError::io(format!("creating cache dir {}", dir.display()), e))?;

        Ok(Self { root, dir })
    }

    /// The live asset directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl AssetStore for FsStore {
    fn path_for(&self, key: &AssetKey) -> PathBuf {
        self.dir.join(format!("{key}.{ASSET_EXTENSION}"))
    }

    async fn exists(&self, key: &AssetKey) -> bool {
        fs::try_exists(self.path_for(key)).await.unwrap_or(false)
    }

    async fn write(&self, key: &AssetKey, bytes: &[u8]) -> RingResult<PathBuf> {
        let path = self.path_for(key);

        // Unique temp name per writer, then an atomic rename: concurrent
        // writers of the same key never expose a torn file.
        let tmp = self.dir.join(format!(
            ".{key}.{}.{}.tmp",
            std::process::id(),
            TMP_SEQ.fetch_add(1, Ordering::Relaxed)
        ));

        fs::write(&tmp, bytes).await.map_err(|e| RingError::AssetWrite {
            path: path.clone(),
            source: e,
        })?;

        if let Err(e) = fs::rename(&tmp, &path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(RingError::AssetWrite { path, source: e });
        }

        debug!("Wrote asset {}", path.display());
        Ok(path)
    }

    async fn enumerate(&self) -> RingResult<Vec<AssetKey>> {
        let mut keys = Vec::new();
        let mut entries = fs::read_dir(&self.dir)
            .await
            .map_err(|e| RingError::scan(format!("reading {}", self.dir.display()), e))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| RingError::scan("reading cache entry", e))?
        {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == ASSET_EXTENSION) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    keys.push(AssetKey::from_stem(stem));
                }
            }
        }

        Ok(keys)
    }

    async fn purge_all(&self, extension: &str) -> RingResult<usize> {
        let extension = extension.trim_start_matches('.');
        let mut removed = 0;

        let mut entries = fs::read_dir(&self.dir)
            .await
            .map_err(|e| RingError::io(format!("reading {}", self.dir.display()), e))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| RingError::io("reading cache entry", e))?
        {
            if entry.path().extension().is_some_and(|ext| ext == extension) {
                fs::remove_file(entry.path())
                    .await
                    .map_err(|e| RingError::io("removing cache file", e))?;
                removed += 1;
            }
        }

        debug!("Purged {removed} cached asset(s)");
        Ok(removed)
    }

    async fn purge_stale(&self) -> RingResult<usize> {
        let mut removed = 0;

        let mut entries = fs::read_dir(&self.root)
            .await
            .map_err(|e| RingError::io(format!("reading {}", self.root.display()), e))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| RingError::io("reading cache root entry", e))?
        {
            let path = entry.path();

            if path == self.dir {
                continue;
            }

            let is_dir = entry
                .file_type()
                .await
                .map_err(|e| RingError::io("inspecting cache root entry", e))?
                .is_dir();

            if is_dir {
                // Old format-version directories only; unrelated dirs stay.
                let versioned = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .and_then(|n| n.strip_prefix('v'))
                    .is_some_and(|n| n.parse::<u32>().is_ok());
                if versioned {
                    fs::remove_dir_all(&path)
                        .await
                        .map_err(|e| RingError::io("removing stale cache dir", e))?;
                    removed += 1;
                }
            } else if path.extension().is_some_and(|ext| ext == ASSET_EXTENSION) {
                // Legacy flat layout wrote assets directly under the root.
                fs::remove_file(&path)
                    .await
                    .map_err(|e| RingError::io("removing legacy asset", e))?;
                removed += 1;
            }
        }

        if removed > 0 {
            warn!("Removed {removed} stale cache item(s) from older versions");
        }
        Ok(removed)
    }
}
