//! Configuration for the lunar atlas.
//!
//! Settings persist to disk as `config.ron`. CLI flags override the loaded
//! values, and each section converts into the plain parameter struct of the
//! library crate it tunes, so those crates never depend on this one.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CONFIG_FILE_NAME, Config, DebugConfig, LabelsConfig, TerrainConfig, TrajectorySettings,
};
pub use error::ConfigError;
