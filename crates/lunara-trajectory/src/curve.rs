//! Curve helpers shared by the trajectory profiles.

use glam::DVec3;

/// Evaluate a quadratic Bézier at `t` in \[0, 1\].
#[inline]
pub fn quadratic_bezier(p0: DVec3, control: DVec3, p1: DVec3, t: f64) -> DVec3 {
    let u = 1.0 - t;
    p0 * (u * u) + control * (2.0 * u * t) + p1 * (t * t)
}

/// Append `segments + 1` samples of a quadratic Bézier, endpoints included.
pub(crate) fn push_bezier(
    points: &mut Vec<DVec3>,
    p0: DVec3,
    control: DVec3,
    p1: DVec3,
    segments: usize,
) {
    let segments = segments.max(1);
    points.extend((0..=segments).map(|i| {
        let t = i as f64 / segments as f64;
        quadratic_bezier(p0, control, p1, t)
    }));
}

/// Wrap an angular difference in degrees into (-180, 180\].
///
/// Used to sweep along the shorter arc between two longitudes.
pub fn wrap_degrees(delta: f64) -> f64 {
    let d = delta.rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}
