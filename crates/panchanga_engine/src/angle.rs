//! Angle normalization helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle to (-180, 180] degrees.
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let r = normalize_360(deg);
    if r > 180.0 { r - 360.0 } else { r }
}

/// Arcseconds to degrees.
pub(crate) const ARCSEC_TO_DEG: f64 = 1.0 / 3600.0;

/// `sin(2π·x)` for an argument given in revolutions.
pub(crate) fn sin_rev(x: f64) -> f64 {
    (std::f64::consts::TAU * (x - x.floor())).sin()
}
