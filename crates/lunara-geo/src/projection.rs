//! Lat/lon to Cartesian projection and its inverse.
//!
//! Convention: the poles sit on ±Y and the ±180° longitude seam on −X. The
//! polar angle is `φ = (90 − lat)` and the azimuth is `θ = (lon + 180)`, so
//! `x = −r·sinφ·cosθ`, `y = r·cosφ`, `z = r·sinφ·sinθ`.

use glam::DVec3;

use crate::GeoPoint;

/// Project a latitude/longitude (degrees) onto a sphere of the given radius.
pub fn project(lat: f64, lon: f64, radius: f64) -> DVec3 {
    let phi = (90.0 - lat).to_radians();
    let theta = (lon + 180.0).to_radians();

    DVec3::new(
        -radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

/// Recover latitude/longitude (degrees) from a point in the Moon's frame.
///
/// The radius is discarded. A point at the origin maps to `(0, 0)`.
pub fn unproject(point: DVec3) -> GeoPoint {
    let r = point.length();
    if r < 1e-12 {
        return GeoPoint::new(0.0, 0.0);
    }

    let lat = (point.y / r).clamp(-1.0, 1.0).asin().to_degrees();
    // x = r·cos(lat)·cos(lon) and z = −r·cos(lat)·sin(lon) under `project`.
    let lon = (-point.z).atan2(point.x).to_degrees();

    GeoPoint::new(lat, lon)
}
