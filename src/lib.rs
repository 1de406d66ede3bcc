//! ringcache - disk-memoized SVG progress rings
//!
//! Renders circular progress indicators as deterministic SVG documents
//! and memoizes them on disk keyed by color and percentage, with an
//! in-memory index populated by a background scan.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;

pub use cache::ProgressCache;
pub use error::{RingError, RingResult};
