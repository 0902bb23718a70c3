//! Discrete color bands for terrain shading.

/// Elevation band of a surface point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SurfaceBand {
    /// Below -3 km: basin floors and the deepest crater bottoms.
    DeepBasin,
    /// -3 to -1 km: mare plains.
    Mare,
    /// -1 to 1 km.
    Lowland,
    /// 1 to 3 km.
    Highland,
    /// Above 3 km: polar massifs and crater rims.
    Peak,
}

impl SurfaceBand {
    /// Linear RGB color of this band.
    pub fn color(self) -> [f32; 3] {
        match self {
            SurfaceBand::DeepBasin => [0.22, 0.22, 0.24],
            SurfaceBand::Mare => [0.33, 0.33, 0.35],
            SurfaceBand::Lowland => [0.50, 0.49, 0.47],
            SurfaceBand::Highland => [0.66, 0.65, 0.62],
            SurfaceBand::Peak => [0.82, 0.81, 0.78],
        }
    }
}

/// Classify an elevation given in scene units.
///
/// `elevation_scale` is the scene-units-per-km factor the field was built
/// with; a non-positive scale is treated as 1.
pub fn surface_band(elevation: f64, elevation_scale: f64) -> SurfaceBand {
    let scale = if elevation_scale > 0.0 { elevation_scale } else { 1.0 };
    let km = elevation / scale;

    if km < -3.0 {
        SurfaceBand::DeepBasin
    } else if km < -1.0 {
        SurfaceBand::Mare
    } else if km < 1.0 {
        SurfaceBand::Lowland
    } else if km < 3.0 {
        SurfaceBand::Highland
    } else {
        SurfaceBand::Peak
    }
}
