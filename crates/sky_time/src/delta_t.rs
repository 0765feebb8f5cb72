//! Delta-T (TT − UT) models.
//!
//! The pipeline only consumes a scalar number of seconds; [`DeltaT`] is the
//! seam through which that scalar is supplied. [`EspenakMeeus`] is the
//! default model, [`FixedDeltaT`] lets a caller pin the value.
//!
//! Source: F. Espenak & J. Meeus, _Five Millennium Canon of Solar Eclipses_
//! (NASA/TP-2006-214141), section 2.6 polynomial expressions.

use crate::julian::J2000_JD;

/// Source of the Delta-T correction for a UT Julian Date.
pub trait DeltaT {
    /// TT − UT in seconds at `jd_ut`.
    fn delta_t_seconds(&self, jd_ut: f64) -> f64;
}

/// A caller-supplied constant Delta-T.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDeltaT(pub f64);

impl DeltaT for FixedDeltaT {
    fn delta_t_seconds(&self, _jd_ut: f64) -> f64 {
        self.0
    }
}

/// Espenak–Meeus piecewise polynomials.
///
/// Outside −500..2150 the long-term parabola `−20 + 32·u²` is used, with
/// `u` the centuries from 1820. Accuracy degrades quickly away from the
/// telescopic era; values are returned without clamping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EspenakMeeus;

impl DeltaT for EspenakMeeus {
    fn delta_t_seconds(&self, jd_ut: f64) -> f64 {
        espenak_meeus(decimal_year(jd_ut))
    }
}

/// Decimal year of a Julian Date (Julian years from J2000.0).
pub fn decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / 365.25
}

fn long_term(y: f64) -> f64 {
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

fn espenak_meeus(y: f64) -> f64 {
    if y < -500.0 {
        long_term(y)
    } else if y < 500.0 {
        let u = y / 100.0;
        poly(
            u,
            &[
                10583.6,
                -1014.41,
                33.78311,
                -5.952053,
                -0.1798452,
                0.022174192,
                0.0090316521,
            ],
        )
    } else if y < 1600.0 {
        let u = (y - 1000.0) / 100.0;
        poly(
            u,
            &[
                1574.2,
                -556.01,
                71.23472,
                0.319781,
                -0.8503463,
                -0.005050998,
                0.0083572073,
            ],
        )
    } else if y < 1700.0 {
        let t = y - 1600.0;
        poly(t, &[120.0, -0.9808, -0.01532, 1.0 / 7129.0])
    } else if y < 1800.0 {
        let t = y - 1700.0;
        poly(t, &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0])
    } else if y < 1860.0 {
        let t = y - 1800.0;
        poly(
            t,
            &[
                13.72,
                -0.332447,
                0.0068612,
                0.0041116,
                -0.00037436,
                0.0000121272,
                -0.0000001699,
                0.000000000875,
            ],
        )
    } else if y < 1900.0 {
        let t = y - 1860.0;
        poly(
            t,
            &[
                7.62,
                0.5737,
                -0.251754,
                0.01680668,
                -0.0004473624,
                1.0 / 233_174.0,
            ],
        )
    } else if y < 1920.0 {
        let t = y - 1900.0;
        poly(t, &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197])
    } else if y < 1941.0 {
        let t = y - 1920.0;
        poly(t, &[21.20, 0.84493, -0.076100, 0.0020936])
    } else if y < 1961.0 {
        let t = y - 1950.0;
        poly(t, &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0])
    } else if y < 1986.0 {
        let t = y - 1975.0;
        poly(t, &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0])
    } else if y < 2005.0 {
        let t = y - 2000.0;
        poly(
            t,
            &[
                63.86,
                0.3345,
                -0.060374,
                0.0017275,
                0.000651814,
                0.00002373599,
            ],
        )
    } else if y < 2050.0 {
        let t = y - 2000.0;
        poly(t, &[62.92, 0.32217, 0.005589])
    } else if y < 2150.0 {
        long_term(y) - 0.5628 * (2150.0 - y)
    } else {
        long_term(y)
    }
}

/// Horner evaluation, coefficients in ascending powers.
fn poly(x: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_ignores_epoch() {
        let dt = FixedDeltaT(69.2);
        assert_eq!(dt.delta_t_seconds(0.0), 69.2);
        assert_eq!(dt.delta_t_seconds(J2000_JD), 69.2);
    }

    #[test]
    fn decimal_year_at_j2000() {
        assert_eq!(decimal_year(J2000_JD), 2000.0);
        assert!((decimal_year(2_415_020.0) - 1900.0).abs() < 1e-12);
    }

    #[test]
    fn year_2000_value() {
        let dt = EspenakMeeus.delta_t_seconds(J2000_JD);
        assert!((dt - 63.86).abs() < 1e-9, "ΔT(2000) = {dt}");
    }

    #[test]
    fn year_1900_value() {
        let dt = EspenakMeeus.delta_t_seconds(2_415_020.0);
        assert!((dt + 2.79).abs() < 1e-6, "ΔT(1900) = {dt}");
    }

    #[test]
    fn modern_era_band() {
        // 2024: observed ΔT is about 69 s; the polynomial extrapolates ~74 s.
        let jd = J2000_JD + 24.0 * 365.25;
        let dt = EspenakMeeus.delta_t_seconds(jd);
        assert!((60.0..80.0).contains(&dt), "ΔT(2024) = {dt}");
    }

    #[test]
    fn ancient_values_are_large() {
        // 1000 BC (year −999): tens of thousands of seconds.
        let jd = J2000_JD - 2999.0 * 365.25;
        let dt = EspenakMeeus.delta_t_seconds(jd);
        assert!(dt > 20_000.0, "ΔT(−999) = {dt}");
    }

    #[test]
    fn continuous_at_1600_boundary() {
        let before = espenak_meeus(1599.999_999);
        let after = espenak_meeus(1600.0);
        assert!((before - after).abs() < 1.0, "{before} vs {after}");
    }

    #[test]
    fn poly_horner() {
        assert_eq!(poly(2.0, &[1.0, 2.0, 3.0]), 1.0 + 4.0 + 12.0);
    }
}
