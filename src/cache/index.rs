//! In-memory index of assets known to exist on disk
//!
//! Two states: unloaded (initial) and loaded. The one-time transition
//! happens when the bootstrap scan hands over its snapshot via [`CacheIndex::load`].
//! A negative lookup is never authoritative; callers fall back to a direct
//! store existence check. Assets written after the snapshot are not inserted,
//! so the index can under-report but never over-reports.

use crate::cache::key::AssetKey;
use std::collections::HashSet;
use std::sync::RwLock;
use tracing::{debug, warn};

#[derive(Default)]
struct IndexState {
    loaded: bool,
    keys: HashSet<AssetKey>,
}

/// Set of cache keys observed on disk at scan time
#[derive(Default)]
pub struct CacheIndex {
    inner: RwLock<IndexState>,
}

impl CacheIndex {
    /// Create an empty, unloaded index
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` was present at scan time
    ///
    /// Reports false while unloaded and on a poisoned lock; both degrade
    /// to the caller's existence-check fallback.
    pub fn contains(&self, key: &AssetKey) -> bool {
        self.inner
            .read()
            .map(|state| state.loaded && state.keys.contains(key))
            .unwrap_or(false)
    }

    /// Whether the bootstrap scan has completed
    pub fn is_loaded(&self) -> bool {
        self.inner.read().map(|state| state.loaded).unwrap_or(false)
    }

    /// Install the scan snapshot and transition to loaded
    ///
    /// The scan accumulates keys outside the lock; this takes the exclusive
    /// lock exactly once for the bulk insert.
    pub fn load(&self, keys: impl IntoIterator<Item = AssetKey>) {
        match self.inner.write() {
            Ok(mut state) => {
                state.keys.extend(keys);
                state.loaded = true;
                debug!("Cache index loaded with {} key(s)", state.keys.len());
            }
            Err(_) => warn!("Cache index lock poisoned, index stays unloaded"),
        }
    }
}
