//! Ecliptic ↔ equatorial conversion.
//!
//! Rotation about the vernal-equinox axis by the obliquity ε. Right
//! ascension always comes from a two-argument arctangent so the quadrant
//! is preserved; the `tan β` term of the textbook formula is multiplied
//! through by `cos β` (which is never negative for β ∈ [−90°, 90°]), so the
//! ecliptic poles stay finite.
//!
//! Source: Meeus, _Astronomical Algorithms_, eq. 13.3, 13.4 and 13.5, 13.6.

use crate::angle::{asin_deg, normalize_deg};

/// Ecliptic longitude/latitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticCoords {
    /// Longitude λ in degrees, range [0, 360).
    pub lon_deg: f64,
    /// Latitude β in degrees, range [-90, 90].
    pub lat_deg: f64,
}

/// Right ascension/declination in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoords {
    /// Right ascension α in degrees, range [0, 360).
    pub ra_deg: f64,
    /// Declination δ in degrees, range [-90, 90].
    pub dec_deg: f64,
}

impl EquatorialCoords {
    /// Right ascension in hours, range [0, 24).
    pub fn ra_hours(&self) -> f64 {
        crate::angle::normalize_hours(self.ra_deg / 15.0)
    }
}

/// Convert ecliptic (λ, β) to equatorial (α, δ) for obliquity ε.
///
/// ```text
/// sin δ = sin β cos ε + cos β sin ε sin λ
/// α     = atan2(sin λ cos ε − tan β sin ε, cos λ)
/// ```
///
/// At β = ±90° the result is the ecliptic pole: δ = ±(90° − ε) and
/// α = 270° / 90°. No input produces NaN for finite arguments.
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> EquatorialCoords {
    let (sin_l, cos_l) = lon_deg.to_radians().sin_cos();
    let (sin_b, cos_b) = lat_deg.to_radians().sin_cos();
    let (sin_e, cos_e) = obliquity_deg.to_radians().sin_cos();

    let sin_dec = sin_b * cos_e + cos_b * sin_e * sin_l;
    let y = sin_l * cos_e * cos_b - sin_b * sin_e;
    let x = cos_l * cos_b;

    EquatorialCoords {
        ra_deg: normalize_deg(y.atan2(x).to_degrees()),
        dec_deg: asin_deg(sin_dec),
    }
}

/// Convert equatorial (α, δ) back to ecliptic (λ, β) for obliquity ε.
///
/// The inverse of [`ecliptic_to_equatorial`]: the same rotation with the
/// sign of ε reversed.
pub fn equatorial_to_ecliptic(ra_deg: f64, dec_deg: f64, obliquity_deg: f64) -> EclipticCoords {
    let (sin_a, cos_a) = ra_deg.to_radians().sin_cos();
    let (sin_d, cos_d) = dec_deg.to_radians().sin_cos();
    let (sin_e, cos_e) = obliquity_deg.to_radians().sin_cos();

    let sin_lat = sin_d * cos_e - cos_d * sin_e * sin_a;
    let y = sin_a * cos_e * cos_d + sin_d * sin_e;
    let x = cos_a * cos_d;

    EclipticCoords {
        lon_deg: normalize_deg(y.atan2(x).to_degrees()),
        lat_deg: asin_deg(sin_lat),
    }
}
