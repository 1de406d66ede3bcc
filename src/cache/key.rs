//! Cache key derivation for progress assets
//!
//! A key embeds the normalized color and the progress percentage rounded
//! to two decimals, e.g. `3584e4.42.00`. The same `(color, progress)` pair
//! always derives the same key, so keys double as asset file stems.

use std::fmt;

/// Clamp a progress percentage into `[0, 100]`
///
/// Out-of-range values collapse onto the boundaries; non-finite input
/// collapses onto 0.
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 100.0)
    }
}

/// Identifier addressing one rendered progress asset
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetKey(String);

impl AssetKey {
    /// Derive the key for a color token and progress percentage
    ///
    /// Pure and total: `color` is normalized by stripping a leading `#`,
    /// `progress` is clamped before formatting.
    pub fn derive(color: &str, progress: f64) -> Self {
        let color = color.trim_start_matches('#');
        let progress = clamp_progress(progress);
        Self(format!("{color}.{progress:.2}"))
    }

    /// Reconstruct a key from an asset file stem found on disk
    pub fn from_stem(stem: &str) -> Self {
        Self(stem.to_string())
    }

    /// The key as a filename-safe string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
