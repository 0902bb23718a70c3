//! Configuration sections with defaults and RON persistence.

use std::path::{Path, PathBuf};

use glam::DVec3;
use lunara_labels::PlacerConfig;
use lunara_terrain::FieldConfig;
use lunara_trajectory::{DEFAULT_CYCLE_MS, TrajectoryConfig};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Top-level atlas configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Elevation grid settings.
    pub terrain: TerrainConfig,
    /// Label placement settings.
    pub labels: LabelsConfig,
    /// Trajectory shape and animation settings.
    pub trajectory: TrajectorySettings,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Elevation grid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Latitude rows, pole to pole inclusive.
    pub lat_bands: usize,
    /// Longitude columns, seam to seam inclusive.
    pub lon_bands: usize,
    /// Nominal Moon radius in scene units.
    pub moon_radius: f64,
    /// Scene units per km of elevation.
    pub elevation_scale: f64,
}

/// Label placement configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LabelsConfig {
    /// Minimum distance between two labels.
    pub min_distance: f64,
    /// Half-width of the fallback jitter.
    pub jitter: f64,
    /// Vertical lift of a fallback label.
    pub fallback_lift: f64,
    /// Seed for the fallback jitter.
    pub seed: u64,
}

/// Trajectory configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrajectorySettings {
    /// Departure point representing Earth, in scene units.
    pub earth_position: [f64; 3],
    /// Orbit height above the nominal radius.
    pub orbit_altitude: f64,
    /// Minimum height of descent points above the terrain.
    pub clearance: f64,
    /// Segments in an Earth departure arc.
    pub approach_segments: usize,
    /// Segments in the partial orbit before descent.
    pub orbit_segments: usize,
    /// Segments in the final descent.
    pub descent_segments: usize,
    /// Segments in a closed steady orbit.
    pub loop_segments: usize,
    /// Time for the cursor to traverse a path once, in milliseconds.
    pub cycle_ms: f64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Directory for the JSON log file. `None` keeps logs on the console only.
    pub log_dir: Option<PathBuf>,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        let field = FieldConfig::default();
        Self {
            lat_bands: field.lat_bands,
            lon_bands: field.lon_bands,
            moon_radius: field.moon_radius,
            elevation_scale: field.elevation_scale,
        }
    }
}

impl Default for LabelsConfig {
    fn default() -> Self {
        let placer = PlacerConfig::default();
        Self {
            min_distance: placer.min_distance,
            jitter: placer.jitter,
            fallback_lift: placer.fallback_lift,
            seed: placer.seed,
        }
    }
}

impl Default for TrajectorySettings {
    fn default() -> Self {
        let trajectory = TrajectoryConfig::default();
        Self {
            earth_position: trajectory.earth_position.to_array(),
            orbit_altitude: trajectory.orbit_altitude,
            clearance: trajectory.clearance,
            approach_segments: trajectory.approach_segments,
            orbit_segments: trajectory.orbit_segments,
            descent_segments: trajectory.descent_segments,
            loop_segments: trajectory.loop_segments,
            cycle_ms: DEFAULT_CYCLE_MS,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

// --- Conversions into library parameters ---

impl Config {
    /// Grid parameters for [`lunara_terrain::ElevationField::build_with`].
    pub fn field_config(&self) -> FieldConfig {
        FieldConfig {
            lat_bands: self.terrain.lat_bands,
            lon_bands: self.terrain.lon_bands,
            moon_radius: self.terrain.moon_radius,
            elevation_scale: self.terrain.elevation_scale,
        }
    }

    /// Parameters for a [`lunara_labels::LabelPlacer`].
    pub fn placer_config(&self) -> PlacerConfig {
        PlacerConfig {
            min_distance: self.labels.min_distance,
            jitter: self.labels.jitter,
            fallback_lift: self.labels.fallback_lift,
            seed: self.labels.seed,
        }
    }

    /// Parameters for a [`lunara_trajectory::TrajectorySynthesizer`].
    ///
    /// The nominal radius comes from the terrain section so paths and the
    /// globe agree on scale; shape constants not exposed here keep their
    /// library defaults.
    pub fn trajectory_config(&self) -> TrajectoryConfig {
        let t = &self.trajectory;
        TrajectoryConfig {
            moon_radius: self.terrain.moon_radius,
            earth_position: DVec3::from_array(t.earth_position),
            orbit_altitude: t.orbit_altitude,
            clearance: t.clearance,
            approach_segments: t.approach_segments,
            orbit_segments: t.orbit_segments,
            descent_segments: t.descent_segments,
            loop_segments: t.loop_segments,
            ..TrajectoryConfig::default()
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::WriteError {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::WriteError {
            path: config_path.clone(),
            source,
        })?;
        Ok(())
    }

    /// Re-read the file: returns `Some(new_config)` if it differs from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE_NAME))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("lat_bands: 72"));
        assert!(ron_str.contains("min_distance: 30.0"));
        assert!(ron_str.contains("cycle_ms: 8000.0"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.debug.log_dir = Some(PathBuf::from("/tmp/lunara-logs"));
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_defaults_match_library_defaults() {
        let config = Config::default();
        assert_eq!(config.field_config(), FieldConfig::default());
        assert_eq!(config.placer_config(), PlacerConfig::default());
        assert_eq!(config.trajectory_config(), TrajectoryConfig::default());
        assert_eq!(config.trajectory.cycle_ms, DEFAULT_CYCLE_MS);
    }

    #[test]
    fn test_trajectory_radius_follows_terrain() {
        let mut config = Config::default();
        config.terrain.moon_radius = 250.0;
        config.trajectory.earth_position = [1000.0, 0.0, 0.0];
        let t = config.trajectory_config();
        assert_eq!(t.moon_radius, 250.0);
        assert_eq!(t.earth_position, DVec3::new(1000.0, 0.0, 0.0));
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(terrain: (lat_bands: 36), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.terrain.lat_bands, 36);
        assert_eq!(config.terrain.lon_bands, 144);
        assert_eq!(config.labels, LabelsConfig::default());
        assert_eq!(config.trajectory, TrajectorySettings::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.terrain.lat_bands = 90;
        config.labels.seed = 42;
        config.trajectory.cycle_ms = 4000.0;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("lunara");
        let config = Config::load_or_create(&nested).unwrap();
        assert_eq!(config, Config::default());
        assert!(nested.join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.trajectory.clearance = 5.0;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.unwrap().trajectory.clearance, 5.0);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();
        assert!(config.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{{not valid}}").unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_ron_comments_accepted() {
        let ron_str = "// atlas settings\n(\n  // nothing overridden\n)";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config, Config::default());
    }
}
