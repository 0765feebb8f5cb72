//! Equatorial → horizontal conversion.
//!
//! Azimuth follows the convention of the classical formula: measured
//! westward from the south point, so a body due south has A = 0° and a
//! body due west has A = 90°. [`HorizontalCoords::azimuth_from_north_deg`]
//! gives the navigational form.
//!
//! Source: Meeus, _Astronomical Algorithms_, eq. 13.5 and 13.6.

use crate::angle::{asin_deg, normalize_deg};

/// Azimuth/altitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalCoords {
    /// Azimuth A in degrees from south, westward, range [0, 360).
    pub azimuth_deg: f64,
    /// Altitude h in degrees, range [-90, 90].
    pub altitude_deg: f64,
}

impl HorizontalCoords {
    /// Azimuth measured eastward from north, range [0, 360).
    pub fn azimuth_from_north_deg(&self) -> f64 {
        normalize_deg(self.azimuth_deg + 180.0)
    }
}

/// Local hour angle in degrees, range [0, 360).
///
/// H = LST·15 − α, with the local sidereal time in hours.
pub fn hour_angle_deg(lst_hours: f64, ra_deg: f64) -> f64 {
    normalize_deg(lst_hours * 15.0 - ra_deg)
}

/// Convert hour angle H and declination δ to horizontal (A, h) at
/// latitude φ.
///
/// ```text
/// sin h = sin δ sin φ + cos δ cos φ cos H
/// A     = atan2(sin H, cos H sin φ − tan δ cos φ)
/// ```
///
/// At φ = ±90° every direction is south (or north): the azimuth returned
/// is finite but carries no physical meaning, and callers that need a
/// stable azimuth must special-case the poles.
pub fn equatorial_to_horizontal(
    hour_angle_deg: f64,
    dec_deg: f64,
    latitude_deg: f64,
) -> HorizontalCoords {
    let (sin_h, cos_h) = hour_angle_deg.to_radians().sin_cos();
    let (sin_d, cos_d) = dec_deg.to_radians().sin_cos();
    let (sin_p, cos_p) = latitude_deg.to_radians().sin_cos();

    let sin_alt = sin_d * sin_p + cos_d * cos_p * cos_h;
    let y = sin_h * cos_d;
    let x = cos_h * cos_d * sin_p - sin_d * cos_p;

    HorizontalCoords {
        azimuth_deg: normalize_deg(y.atan2(x).to_degrees()),
        altitude_deg: asin_deg(sin_alt),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_13b() {
        // Venus from Washington, 1987-Apr-10 19:21 UT:
        // H = 64.352133°, δ = −6.719892°, φ = 38.921389°
        // → A = 68.0337°, h = 15.1249°
        let hz = equatorial_to_horizontal(64.352_133, -6.719_892, 38.921_389);
        assert!((hz.azimuth_deg - 68.0337).abs() < 1e-3, "A = {}", hz.azimuth_deg);
        assert!((hz.altitude_deg - 15.1249).abs() < 1e-3, "h = {}", hz.altitude_deg);
    }

    #[test]
    fn transit_is_due_south() {
        // H = 0, body south of zenith.
        let hz = equatorial_to_horizontal(0.0, 10.0, 45.0);
        assert!(hz.azimuth_deg.abs() < 1e-9 || (hz.azimuth_deg - 360.0).abs() < 1e-9);
        assert!((hz.altitude_deg - 55.0).abs() < 1e-9);
        assert!((hz.azimuth_from_north_deg() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn zenith_at_matching_declination() {
        let hz = equatorial_to_horizontal(0.0, 52.0, 52.0);
        assert!((hz.altitude_deg - 90.0).abs() < 1e-6);
    }

    #[test]
    fn western_hour_angle_gives_western_azimuth() {
        // H = 90° (six hours past transit) sets in the west half: A ∈ (0, 180).
        let hz = equatorial_to_horizontal(90.0, 0.0, 40.0);
        assert!(hz.azimuth_deg > 0.0 && hz.azimuth_deg < 180.0);
        // On the equator at H = 90° the body is exactly on the horizon, due west.
        let hz = equatorial_to_horizontal(90.0, 0.0, 0.0);
        assert!(hz.altitude_deg.abs() < 1e-9);
        assert!((hz.azimuth_deg - 90.0).abs() < 1e-9);
    }

    #[test]
    fn hour_angle_wraps() {
        assert!((hour_angle_deg(1.0, 30.0) + 15.0 - 360.0).abs() < 1e-12);
        assert!((hour_angle_deg(12.0, 90.0) - 90.0).abs() < 1e-12);
        assert_eq!(hour_angle_deg(2.0, 30.0), 0.0);
    }

    #[test]
    fn pole_latitude_is_finite() {
        for lat in [90.0, -90.0] {
            let hz = equatorial_to_horizontal(123.0, 20.0, lat);
            assert!(hz.azimuth_deg.is_finite());
            // At the pole altitude equals |declination| with matching hemisphere.
            let expected = if lat > 0.0 { 20.0 } else { -20.0 };
            assert!((hz.altitude_deg - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn ranges_over_grid() {
        for h in (0..360).step_by(15) {
            for dec in [-89.0, -45.0, 0.0, 30.0, 89.0] {
                for lat in [-66.0, -10.0, 0.0, 51.5] {
                    let hz = equatorial_to_horizontal(h as f64, dec, lat);
                    assert!((0.0..360.0).contains(&hz.azimuth_deg));
                    assert!((-90.0..=90.0).contains(&hz.altitude_deg));
                }
            }
        }
    }
}
