//! `lunara`: builds the lunar globe from a catalog, places labels, and runs
//! the trajectory animation for a selected artifact.
//!
//! Run with: `cargo run -p lunara-app -- --artifact "Apollo 11"`

use clap::Parser;
use lunara_app::atlas::Atlas;
use lunara_app::error::AppError;
use lunara_app::platform::PlatformDirs;
use lunara_catalog::Catalog;
use lunara_config::{CliArgs, Config};
use lunara_geo::unproject;
use tracing::info;

fn main() {
    let args = CliArgs::parse();
    if let Err(e) = run(&args) {
        eprintln!("lunara: {e}");
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), AppError> {
    let dirs = match &args.config {
        Some(dir) => PlatformDirs {
            config_dir: dir.clone(),
            log_dir: dir.join("logs"),
        },
        None => PlatformDirs::resolve()?,
    };
    dirs.create_dirs()?;

    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(args);

    let log_dir = config.debug.log_dir.clone().unwrap_or(dirs.log_dir);
    lunara_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config))?;

    info!("Lunara lunar atlas");
    info!("Config: {}", dirs.config_dir.display());

    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };

    let mut atlas = Atlas::build(&config, catalog);
    let summary = atlas.summary();
    info!(
        "Terrain: {}x{} grid, elevation {:.2}..{:.2}",
        summary.grid.0, summary.grid.1, summary.elevation_range.0, summary.elevation_range.1
    );
    for (band, count) in &summary.bands {
        info!("  {band:?}: {count} vertices");
    }
    info!(
        "Labels: {} placed, {} fallback, {} facing the camera",
        summary.labels, summary.fallback_labels, summary.visible_labels
    );

    match &args.artifact {
        Some(name) => {
            atlas.select(name)?;
            if let Some(pose) = atlas.animate_fixed(args.frames) {
                let over = unproject(pose.position);
                info!(
                    "Cursor after {} frames: progress {:.3}, over {over}, altitude {:.2}",
                    args.frames,
                    atlas.session().progress(),
                    pose.position.length() - atlas.field().surface_radius(over.lat, over.lon),
                );
            }
            atlas.deselect();
        }
        None => {
            for artifact in &atlas.catalog().artifacts {
                let trajectory = atlas.trajectory(artifact);
                info!(
                    "{} ({}, {}): {:?}, {} points, length {:.1}",
                    artifact.name,
                    artifact.operator,
                    artifact.year,
                    trajectory.profile,
                    trajectory.len(),
                    trajectory.length(),
                );
            }
        }
    }

    Ok(())
}
