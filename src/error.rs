//! Error types for ringcache
//!
//! All modules use `RingResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for ringcache operations
pub type RingResult<T> = Result<T, RingError>;

/// All errors that can occur in ringcache
#[derive(Error, Debug)]
pub enum RingError {
    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No user cache directory available on this platform")]
    CacheDirUnavailable,

    // Renderer errors
    #[error("SVG document build failed: {0}")]
    SvgBuild(String),

    // Store errors
    #[error("Failed to write asset {path}: {source}")]
    AssetWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cache directory scan failed: {context}")]
    Scan {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl RingError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a scan error with context
    pub fn scan(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Scan {
            context: context.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::CacheDirUnavailable => {
                Some("Set --cache-dir (or RINGCACHE_DIR) to a writable directory")
            }
            Self::AssetWrite { .. } => Some("Check free space and permissions on the cache directory"),
            _ => None,
        }
    }
}
