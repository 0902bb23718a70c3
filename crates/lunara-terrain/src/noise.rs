//! Deterministic sine-hash noise.
//!
//! Not gradient noise: adjacent inputs give uncorrelated outputs. The field
//! only needs a cheap, repeatable texture, and sampling through the grid
//! smooths it out. Trigonometry here goes through `libm`, so the noise
//! values themselves are bit-exact across platforms; the rest of the model
//! uses `std` math and is only reproducible on a given platform.

/// Frequency applied to lat/lon (degrees) before hashing.
const DETAIL_FREQUENCY: f64 = 0.37;

/// Hash a 2D input into \[0, 1).
#[inline]
pub fn hash01(x: f64, y: f64) -> f64 {
    let s = libm::sin(x * 12.9898 + y * 78.233) * 43_758.545_3;
    s - libm::floor(s)
}

/// High-frequency detail noise in \[-1, 1) at a lat/lon in degrees.
#[inline]
pub fn detail_noise(lat: f64, lon: f64) -> f64 {
    hash01(lat * DETAIL_FREQUENCY, lon * DETAIL_FREQUENCY) * 2.0 - 1.0
}

/// Smooth, low-frequency undulation in \[-1, 1] at a lat/lon in degrees.
///
/// Even in longitude, so it agrees on both sides of the ±180° seam.
#[inline]
pub fn low_frequency_noise(lat: f64, lon: f64) -> f64 {
    libm::sin(lat * 0.11 + 0.7) * libm::cos(lon * 0.07)
}
