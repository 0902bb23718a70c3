//! Precomputed elevation grid with bilinear sampling.

use std::time::Instant;

use glam::DVec3;
use lunara_geo::{normalize_longitude, project};
use tracing::debug;

use crate::feature::{BasinFeature, CraterFeature};
use crate::model::ElevationModel;

/// Latitude rows in the default grid.
pub const DEFAULT_LAT_BANDS: usize = 72;
/// Longitude columns in the default grid.
pub const DEFAULT_LON_BANDS: usize = 144;

/// Resolution and scale of the elevation grid.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Number of latitude rows, pole to pole inclusive. Default: 72.
    pub lat_bands: usize,
    /// Number of longitude columns, seam to seam inclusive. Default: 144.
    pub lon_bands: usize,
    /// Nominal Moon radius in scene units. Default: 100.
    pub moon_radius: f64,
    /// Scene units per km of elevation. Default: 0.5.
    pub elevation_scale: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            lat_bands: DEFAULT_LAT_BANDS,
            lon_bands: DEFAULT_LON_BANDS,
            moon_radius: 100.0,
            elevation_scale: 0.5,
        }
    }
}

/// Lunar elevation sampled on a uniform lat/lon grid.
///
/// Row `i` lies at `lat = -90 + i * 180 / (lat_bands - 1)` and column `j` at
/// `lon = -180 + j * 360 / (lon_bands - 1)`. The last column duplicates the
/// first so interpolation across the ±180° seam is continuous. The grid is
/// immutable once built.
#[derive(Clone, Debug)]
pub struct ElevationField {
    config: FieldConfig,
    model: ElevationModel,
    /// Row-major `[lat_band][lon_band]` elevations in scene units.
    grid: Vec<f64>,
}

impl ElevationField {
    /// Build a field at the default resolution.
    pub fn build(basins: &[BasinFeature], craters: &[CraterFeature]) -> Self {
        Self::build_with(FieldConfig::default(), basins, craters)
    }

    /// Build a field with an explicit configuration.
    ///
    /// Cost is `O(lat_bands * lon_bands * features)`. Fewer than two bands on
    /// either axis is raised to two.
    pub fn build_with(
        mut config: FieldConfig,
        basins: &[BasinFeature],
        craters: &[CraterFeature],
    ) -> Self {
        config.lat_bands = config.lat_bands.max(2);
        config.lon_bands = config.lon_bands.max(2);

        let start = Instant::now();
        let model = ElevationModel::new(basins, craters, config.elevation_scale);

        let mut grid = Vec::with_capacity(config.lat_bands * config.lon_bands);
        for row in 0..config.lat_bands {
            let lat = lat_of(row, config.lat_bands);
            for col in 0..config.lon_bands {
                let lon = normalize_longitude(lon_of(col, config.lon_bands));
                grid.push(model.elevation_at(lat, lon));
            }
        }

        debug!(
            rows = config.lat_bands,
            cols = config.lon_bands,
            basins = model.basins().len(),
            craters = model.craters().len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "built elevation field"
        );

        Self {
            config,
            model,
            grid,
        }
    }

    /// Elevation in scene units at a lat/lon in degrees, bilinearly interpolated.
    ///
    /// Latitude is clamped to \[-90, 90\]; longitude wraps. Non-finite inputs
    /// are treated as 0.
    pub fn sample(&self, lat: f64, lon: f64) -> f64 {
        let lat = if lat.is_finite() {
            lat.clamp(-90.0, 90.0)
        } else {
            0.0
        };
        let lon = if lon.is_finite() {
            normalize_longitude(lon)
        } else {
            0.0
        };

        let max_row = (self.config.lat_bands - 1) as f64;
        let max_col = (self.config.lon_bands - 1) as f64;

        let fy = ((lat + 90.0) / 180.0 * max_row).clamp(0.0, max_row);
        let fx = ((lon + 180.0) / 360.0 * max_col).clamp(0.0, max_col);

        let y0 = fy.floor() as usize;
        let x0 = fx.floor() as usize;
        let y1 = (y0 + 1).min(self.config.lat_bands - 1);
        let x1 = (x0 + 1).min(self.config.lon_bands - 1);
        let ty = fy - y0 as f64;
        let tx = fx - x0 as f64;

        let v00 = self.value(y0, x0);
        let v01 = self.value(y0, x1);
        let v10 = self.value(y1, x0);
        let v11 = self.value(y1, x1);

        v00 * (1.0 - tx) * (1.0 - ty)
            + v01 * tx * (1.0 - ty)
            + v10 * (1.0 - tx) * ty
            + v11 * tx * ty
    }

    /// Distance from the Moon's center to the sampled surface.
    pub fn surface_radius(&self, lat: f64, lon: f64) -> f64 {
        self.config.moon_radius + self.sample(lat, lon)
    }

    /// Cartesian point `lift` scene units above the sampled surface.
    pub fn surface_point(&self, lat: f64, lon: f64, lift: f64) -> DVec3 {
        project(lat, lon, self.surface_radius(lat, lon) + lift)
    }

    /// Stored elevation at a grid vertex.
    ///
    /// # Panics
    /// Panics if `row` or `col` is outside the grid.
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.grid[row * self.config.lon_bands + col]
    }

    /// `(lat_bands, lon_bands)`.
    pub fn resolution(&self) -> (usize, usize) {
        (self.config.lat_bands, self.config.lon_bands)
    }

    /// Latitude of a grid row, in degrees.
    pub fn lat_of_row(&self, row: usize) -> f64 {
        lat_of(row, self.config.lat_bands)
    }

    /// Longitude of a grid column, in degrees.
    pub fn lon_of_col(&self, col: usize) -> f64 {
        lon_of(col, self.config.lon_bands)
    }

    /// Lowest and highest stored elevation.
    pub fn min_max(&self) -> (f64, f64) {
        self.grid
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// The analytic model the grid was built from.
    pub fn model(&self) -> &ElevationModel {
        &self.model
    }

    /// Nominal Moon radius in scene units.
    pub fn moon_radius(&self) -> f64 {
        self.config.moon_radius
    }

    /// Return a reference to the field configuration.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}

fn lat_of(row: usize, lat_bands: usize) -> f64 {
    -90.0 + row as f64 * 180.0 / (lat_bands - 1) as f64
}

fn lon_of(col: usize, lon_bands: usize) -> f64 {
    -180.0 + col as f64 * 360.0 / (lon_bands - 1) as f64
}
