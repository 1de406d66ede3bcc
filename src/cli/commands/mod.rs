//! CLI command implementations

pub mod config;
pub mod purge;
pub mod render;

pub use config::execute as config;
pub use purge::execute as purge;
pub use render::execute as render;
