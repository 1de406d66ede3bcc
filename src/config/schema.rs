//! Configuration schema for ringcache
//!
//! Configuration is stored at `~/.config/ringcache/config.toml`

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Visual settings for the progress ring
    pub visual: VisualConfig,
}

/// Visual settings for rendered progress assets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualConfig {
    /// Progress ring color as a hex token, with or without a leading `#`
    pub color: String,

    /// Draw a drop shadow under the progress arc
    pub shadow: bool,

    /// Use rounded line caps on both arcs
    pub rounded: bool,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            color: "#3584e4".to_string(),
            shadow: false,
            rounded: true,
        }
    }
}
