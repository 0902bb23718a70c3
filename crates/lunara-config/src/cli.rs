//! Command-line argument parsing for the atlas.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Lunar atlas command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "lunara", about = "Lunar globe atlas")]
pub struct CliArgs {
    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// RON catalog of artifacts and surface features (built-in catalog if omitted).
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Artifact to select; every artifact gets a trajectory if omitted.
    #[arg(long)]
    pub artifact: Option<String>,

    /// Number of animation frames to run for the selected trajectory.
    #[arg(long, default_value_t = 120)]
    pub frames: u32,

    /// Latitude rows of the elevation grid.
    #[arg(long)]
    pub lat_bands: Option<usize>,

    /// Longitude columns of the elevation grid.
    #[arg(long)]
    pub lon_bands: Option<usize>,

    /// Seed for fallback label jitter.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Directory for the JSON log file.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(rows) = args.lat_bands {
            self.terrain.lat_bands = rows;
        }
        if let Some(cols) = args.lon_bands {
            self.terrain.lon_bands = cols;
        }
        if let Some(seed) = args.seed {
            self.labels.seed = seed;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(ref dir) = args.log_dir {
            self.debug.log_dir = Some(dir.clone());
        }
    }
}
