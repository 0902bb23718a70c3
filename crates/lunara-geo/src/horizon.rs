//! Hemisphere visibility test for surface annotations.

use glam::DVec3;

/// Whether a point near the sphere surface faces the camera.
///
/// The Moon is centered at the origin. A surface point is visible when the
/// camera lies in front of the tangent plane through that point, i.e. the
/// outward normal and the point-to-camera vector point the same way. Labels
/// and markers on the far hemisphere are hidden by the renderer based on this
/// flag.
pub fn is_facing(point: DVec3, camera: DVec3) -> bool {
    let normal = point.normalize_or_zero();
    if normal == DVec3::ZERO {
        return true;
    }
    normal.dot(camera - point) > 0.0
}
