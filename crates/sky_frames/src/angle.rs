//! Angle normalization.

/// Wrap into `[0, modulus)`, folding the rounding case `x ≡ -ε` back to 0.
fn wrap(x: f64, modulus: f64) -> f64 {
    let r = x.rem_euclid(modulus);
    if r >= modulus { 0.0 } else { r }
}

/// Normalize degrees to [0, 360).
pub fn normalize_deg(deg: f64) -> f64 {
    wrap(deg, 360.0)
}

/// Normalize hours to [0, 24).
pub fn normalize_hours(hours: f64) -> f64 {
    wrap(hours, 24.0)
}

/// `asin` with its argument clamped to [-1, 1], in degrees.
pub(crate) fn asin_deg(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin().to_degrees()
}
