//! Greenwich and local mean sidereal time.
//!
//! All functions take UT Julian Dates: sidereal time follows the Earth's
//! rotation, so the Delta-T-advanced epoch is never used here.
//!
//! Source: Meeus, _Astronomical Algorithms_, eq. 12.4 (IAU 1982 GMST
//! expressed in days and centuries from J2000.0).

use sky_frames::{normalize_deg, normalize_hours};

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

/// Greenwich Mean Sidereal Time in degrees, range [0, 360).
///
/// θ₀ = 280.46061837 + 360.98564736629·D + 0.000387933·T² − T³/38710000
/// where D = JD_UT − 2451545.0 and T = D / 36525.
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let d = jd_ut - J2000_JD;
    let t = d / DAYS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;
    let theta = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t2 - t3 / 38_710_000.0;
    normalize_deg(theta)
}

/// Greenwich Mean Sidereal Time in hours, range [0, 24).
pub fn gmst_hours(jd_ut: f64) -> f64 {
    normalize_hours(gmst_deg(jd_ut) / 15.0)
}

/// Local mean sidereal time in hours, range [0, 24).
///
/// `longitude_east_deg` is east-positive (west longitudes are negative).
pub fn local_sidereal_time_hours(jd_ut: f64, longitude_east_deg: f64) -> f64 {
    normalize_hours((gmst_deg(jd_ut) + longitude_east_deg) / 15.0)
}
