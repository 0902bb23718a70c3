//! Geographic math for the lunar globe: lat/lon projection onto the sphere,
//! great-circle distances, and horizon visibility.
//!
//! Every placement in the atlas (artifact markers, terrain samples, trajectory
//! endpoints) goes through [`project`], so there is exactly one lat/lon to
//! Cartesian convention in the workspace.

mod geo_point;
mod horizon;
mod projection;

pub use geo_point::{
    GeoPoint, destination_point, great_circle_distance_deg, normalize_longitude,
};
pub use horizon::is_facing;
pub use projection::{project, unproject};

/// Nominal radius of the Moon in kilometers.
pub const MOON_RADIUS_KM: f64 = 1737.4;

/// Kilometers of surface arc per degree on the nominal sphere.
pub const KM_PER_DEGREE: f64 = std::f64::consts::TAU * MOON_RADIUS_KM / 360.0;
