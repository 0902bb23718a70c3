//! Analytic elevation model.
//!
//! Superposes base relief, far-side and polar bias, mare basins, crater
//! rims and floors, and detail noise. All intermediate values are in km; the
//! result is clamped to the physical range and then scaled to scene units.
//! The crater and basin profiles are tuned by eye and must stay as they are so
//! that the terrain mesh and the markers placed on it agree.

use lunara_geo::{GeoPoint, great_circle_distance_deg};
use tracing::warn;

use crate::feature::{BasinFeature, CraterFeature};
use crate::noise::{detail_noise, low_frequency_noise};

/// Constant highland offset applied everywhere, in km.
pub const BASE_HIGHLAND_KM: f64 = 1.0;
/// Extra highland elevation on the far side (|lon| > 90), in km.
const FAR_SIDE_BIAS_KM: f64 = 1.5;
/// Uplift reached at the poles, ramping from |lat| = 60, in km.
const POLAR_UPLIFT_KM: f64 = 1.2;
/// Depth at the center of a mare basin, in km.
pub const MARE_DEPTH_KM: f64 = 2.5;
/// Amplitude of the detail noise, in km.
const DETAIL_NOISE_KM: f64 = 0.03;

/// Lowest elevation stored in the field, in km.
pub const ELEVATION_MIN_KM: f64 = -9.1;
/// Highest elevation stored in the field, in km.
pub const ELEVATION_MAX_KM: f64 = 10.8;

/// Rim band and floor boundary as fractions of the crater radius.
const RIM_INNER: f64 = 0.7;
const RIM_OUTER: f64 = 1.3;
/// Width of the Gaussian rim profile, in units of the crater radius.
const RIM_SIGMA: f64 = 0.15;
/// Craters influence nothing beyond this multiple of their radius.
const CRATER_INFLUENCE: f64 = 2.0;

/// Evaluates elevation directly from a set of features.
#[derive(Clone, Debug)]
pub struct ElevationModel {
    basins: Vec<BasinFeature>,
    craters: Vec<CraterFeature>,
    elevation_scale: f64,
}

impl ElevationModel {
    /// Create a model, discarding features whose radius is non-positive.
    ///
    /// `elevation_scale` converts km to scene units.
    pub fn new(basins: &[BasinFeature], craters: &[CraterFeature], elevation_scale: f64) -> Self {
        let valid_basins: Vec<BasinFeature> =
            basins.iter().copied().filter(BasinFeature::is_valid).collect();
        let valid_craters: Vec<CraterFeature> =
            craters.iter().copied().filter(CraterFeature::is_valid).collect();

        let skipped = (basins.len() - valid_basins.len()) + (craters.len() - valid_craters.len());
        if skipped > 0 {
            warn!(skipped, "ignoring features with non-positive angular radius");
        }

        Self {
            basins: valid_basins,
            craters: valid_craters,
            elevation_scale,
        }
    }

    /// Basins that contribute to the model.
    pub fn basins(&self) -> &[BasinFeature] {
        &self.basins
    }

    /// Craters that contribute to the model.
    pub fn craters(&self) -> &[CraterFeature] {
        &self.craters
    }

    /// Scene units per km.
    pub fn elevation_scale(&self) -> f64 {
        self.elevation_scale
    }

    /// Elevation in scene units at a lat/lon in degrees.
    pub fn elevation_at(&self, lat: f64, lon: f64) -> f64 {
        self.elevation_km(lat, lon) * self.elevation_scale
    }

    /// Elevation in km, clamped to \[[`ELEVATION_MIN_KM`], [`ELEVATION_MAX_KM`]\].
    pub fn elevation_km(&self, lat: f64, lon: f64) -> f64 {
        let here = GeoPoint::new(lat, lon);
        let mut h = BASE_HIGHLAND_KM;

        if lon.abs() > 90.0 {
            h += FAR_SIDE_BIAS_KM * (0.75 + 0.25 * low_frequency_noise(lat, lon));
        }

        if lat.abs() > 60.0 {
            h += POLAR_UPLIFT_KM * (lat.abs() - 60.0) / 30.0;
        }

        for basin in &self.basins {
            let d = great_circle_distance_deg(here, basin.center);
            if d < basin.angular_radius {
                let falloff = 1.0 - d / basin.angular_radius;
                h -= MARE_DEPTH_KM * falloff * falloff;
            }
        }

        for crater in &self.craters {
            h += crater_relief(crater, great_circle_distance_deg(here, crater.center));
        }

        h += DETAIL_NOISE_KM * detail_noise(lat, lon);

        h.clamp(ELEVATION_MIN_KM, ELEVATION_MAX_KM)
    }
}

/// Crater contribution in km at `distance` degrees from its center.
fn crater_relief(crater: &CraterFeature, distance: f64) -> f64 {
    let radius = crater.angular_radius;
    if distance >= CRATER_INFLUENCE * radius {
        return 0.0;
    }

    let t = distance / radius;
    let mut relief = 0.0;

    if (RIM_INNER..=RIM_OUTER).contains(&t) {
        let x = (t - 1.0) / RIM_SIGMA;
        relief += crater.rim_height_km() * (-x * x).exp();
    }
    if t < RIM_INNER {
        relief -= crater.depth_km * (1.0 - t / RIM_INNER);
    }

    relief
}
