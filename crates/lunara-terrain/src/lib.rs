//! Procedural lunar elevation: basin and crater superposition, sine-hash
//! noise, a precomputed lat/lon grid with bilinear sampling, and elevation
//! color bands.

mod color;
mod feature;
mod field;
mod model;
mod noise;

pub use color::{SurfaceBand, surface_band};
pub use feature::{BasinFeature, CraterFeature, MIN_CRATER_RADIUS_DEG};
pub use field::{DEFAULT_LAT_BANDS, DEFAULT_LON_BANDS, ElevationField, FieldConfig};
pub use model::{
    BASE_HIGHLAND_KM, ELEVATION_MAX_KM, ELEVATION_MIN_KM, ElevationModel, MARE_DEPTH_KM,
};
