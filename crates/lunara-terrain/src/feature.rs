//! Geological features that shape the elevation field.

use lunara_geo::{GeoPoint, KM_PER_DEGREE};

use crate::field::DEFAULT_LAT_BANDS;

/// Crater radii are drawn at twice their true angular size so that they stay
/// visible on a 2.5 degree grid.
const CRATER_RADIUS_EXAGGERATION: f64 = 2.0;

/// Smallest radius, in degrees, given to a crater built from its diameter:
/// one and a half rows of the default grid, so the floor and the rim crest
/// never fall into the same grid cell.
pub const MIN_CRATER_RADIUS_DEG: f64 = 1.5 * 180.0 / (DEFAULT_LAT_BANDS - 1) as f64;

/// A mare basin: a broad, smooth, bowl-shaped depression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BasinFeature {
    /// Basin center.
    pub center: GeoPoint,
    /// Radius in degrees of arc. Non-positive radii are ignored by the model.
    pub angular_radius: f64,
}

impl BasinFeature {
    /// Create a basin from a center and an angular radius in degrees.
    pub fn new(center: GeoPoint, angular_radius: f64) -> Self {
        Self {
            center,
            angular_radius,
        }
    }

    /// Create a basin from its surface diameter in kilometers.
    pub fn from_diameter_km(center: GeoPoint, diameter_km: f64) -> Self {
        Self::new(center, diameter_km / 2.0 / KM_PER_DEGREE)
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.angular_radius.is_finite() && self.angular_radius > 0.0
    }
}

/// An impact crater: a raised rim around a depressed floor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CraterFeature {
    /// Crater center.
    pub center: GeoPoint,
    /// Nominal rim radius in degrees of arc.
    pub angular_radius: f64,
    /// Floor depth below the surrounding terrain, in km.
    pub depth_km: f64,
}

impl CraterFeature {
    /// Create a crater with an explicit angular radius (degrees) and depth (km).
    pub fn new(center: GeoPoint, angular_radius: f64, depth_km: f64) -> Self {
        Self {
            center,
            angular_radius,
            depth_km,
        }
    }

    /// Create a crater from its rim-to-rim diameter in kilometers.
    ///
    /// Depth follows a shallow depth/diameter ratio and is bounded to
    /// \[0.4, 4.0\] km. The radius is never below [`MIN_CRATER_RADIUS_DEG`].
    pub fn from_diameter_km(center: GeoPoint, diameter_km: f64) -> Self {
        let angular_radius = (diameter_km / 2.0 / KM_PER_DEGREE * CRATER_RADIUS_EXAGGERATION)
            .max(MIN_CRATER_RADIUS_DEG);
        let depth_km = (0.04 * diameter_km).clamp(0.4, 4.0);
        Self::new(center, angular_radius, depth_km)
    }

    /// Height of the rim crest above the surrounding terrain, in km.
    pub fn rim_height_km(&self) -> f64 {
        0.25 * self.depth_km
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.angular_radius.is_finite() && self.angular_radius > 0.0
    }
}
