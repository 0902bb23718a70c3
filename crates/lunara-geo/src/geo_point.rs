//! Latitude/longitude pairs and the haversine distance between them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A position on the lunar sphere expressed as latitude and longitude.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees. Range: \[-90, 90\]. Positive = north.
    pub lat: f64,
    /// Longitude in degrees. Range: \[-180, 180). Positive = east.
    pub lon: f64,
}

impl GeoPoint {
    /// Create a new point. No normalization is applied; see [`GeoPoint::normalized`].
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Clamp latitude into \[-90, 90\] and wrap longitude into \[-180, 180).
    pub fn normalized(self) -> Self {
        Self {
            lat: self.lat.clamp(-90.0, 90.0),
            lon: normalize_longitude(self.lon),
        }
    }

    /// Great-circle distance to another point, in degrees of arc.
    pub fn distance_deg(&self, other: &GeoPoint) -> f64 {
        great_circle_distance_deg(*self, *other)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lat_dir = if self.lat >= 0.0 { "N" } else { "S" };
        let lon_dir = if self.lon >= 0.0 { "E" } else { "W" };
        write!(
            f,
            "{:.1}\u{00B0}{}, {:.1}\u{00B0}{}",
            self.lat.abs(),
            lat_dir,
            self.lon.abs(),
            lon_dir,
        )
    }
}

/// Wrap a longitude in degrees into \[-180, 180).
#[inline]
pub fn normalize_longitude(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}

/// Haversine great-circle distance between two points, in degrees of arc.
///
/// Degrees rather than radians because every consumer (feature falloff,
/// descent arc angles) works with angular radii in degrees.
pub fn great_circle_distance_deg(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push h a hair above 1 for antipodal points.
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();

    c.to_degrees()
}

/// The point reached by travelling `distance_deg` of arc from `origin` along
/// the initial bearing `bearing_deg` (clockwise from north).
pub fn destination_point(origin: GeoPoint, bearing_deg: f64, distance_deg: f64) -> GeoPoint {
    let lat1 = origin.lat.to_radians();
    let lon1 = origin.lon.to_radians();
    let bearing = bearing_deg.to_radians();
    let delta = distance_deg.to_radians();

    let sin_lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * bearing.cos())
        .clamp(-1.0, 1.0);
    let lat2 = sin_lat2.asin();
    let lon2 = lon1
        + (bearing.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * sin_lat2);

    GeoPoint::new(lat2.to_degrees(), normalize_longitude(lon2.to_degrees()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = GeoPoint::new(23.5, -47.0);
        assert!(p.distance_deg(&p).abs() < EPSILON);
    }

    #[test]
    fn test_quarter_circle_along_equator() {
        let d = great_circle_distance_deg(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 90.0));
        assert!((d - 90.0).abs() < EPSILON, "expected 90, got {d}");
    }

    #[test]
    fn test_pole_to_pole_is_half_circle() {
        let d = great_circle_distance_deg(GeoPoint::new(90.0, 0.0), GeoPoint::new(-90.0, 0.0));
        assert!((d - 180.0).abs() < 1e-6, "expected 180, got {d}");
    }

    #[test]
    fn test_distance_across_seam_is_short() {
        let d = great_circle_distance_deg(GeoPoint::new(0.0, 179.5), GeoPoint::new(0.0, -179.5));
        assert!((d - 1.0).abs() < 1e-6, "seam distance should be 1 degree, got {d}");
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = GeoPoint::new(12.0, 34.0);
        let b = GeoPoint::new(-56.0, 78.0);
        assert!((a.distance_deg(&b) - b.distance_deg(&a)).abs() < EPSILON);
    }

    #[test]
    fn test_normalize_longitude_wraps() {
        assert!((normalize_longitude(180.0) + 180.0).abs() < EPSILON);
        assert!((normalize_longitude(190.0) + 170.0).abs() < EPSILON);
        assert!((normalize_longitude(-190.0) - 170.0).abs() < EPSILON);
        assert!((normalize_longitude(540.0) + 180.0).abs() < EPSILON);
        assert!((normalize_longitude(45.0) - 45.0).abs() < EPSILON);
    }

    #[test]
    fn test_normalized_clamps_latitude() {
        let p = GeoPoint::new(95.0, 200.0).normalized();
        assert_eq!(p.lat, 90.0);
        assert!((p.lon + 160.0).abs() < EPSILON);
    }

    #[test]
    fn test_destination_point_travels_requested_distance() {
        let origin = GeoPoint::new(-20.0, 170.0);
        for bearing in [0.0, 45.0, 90.0, 180.0, 270.0, 333.0] {
            let dest = destination_point(origin, bearing, 12.5);
            let d = origin.distance_deg(&dest);
            assert!((d - 12.5).abs() < 1e-6, "bearing {bearing}: travelled {d}");
            assert!((-180.0..180.0).contains(&dest.lon));
        }
    }

    #[test]
    fn test_destination_due_north() {
        let dest = destination_point(GeoPoint::new(10.0, 30.0), 0.0, 5.0);
        assert!((dest.lat - 15.0).abs() < 1e-9);
        assert!((dest.lon - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_display_format() {
        let p = GeoPoint::new(-3.0, 23.5);
        assert_eq!(format!("{p}"), "3.0\u{00B0}S, 23.5\u{00B0}E");
    }
}
