//! Julian Date ↔ calendar conversions.
//!
//! Dates before 1582-10-15 are interpreted in the Julian calendar, dates
//! from then on in the Gregorian calendar, so the day count is continuous
//! across the reform (1582-10-04 is followed by 1582-10-15).
//!
//! Source: J. Meeus, _Astronomical Algorithms_ (2nd ed.), chapter 7.

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Seconds in a day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// First JD (integer part after the +0.5 shift) on the Gregorian calendar.
const GREGORIAN_START_Z: f64 = 2_299_161.0;

fn is_gregorian(year: i32, month: u32, day: f64) -> bool {
    year > 1582 || (year == 1582 && (month > 10 || (month == 10 && day >= 15.0)))
}

/// Convert a calendar date to Julian Date.
///
/// `day` may carry a fractional part (e.g. 1.5 = noon of the 1st).
/// Astronomical year numbering: year 0 = 1 BC.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let (y, m) = (y as f64, m as f64);

    let b = if is_gregorian(year, month, day) {
        let a = (y / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };

    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Convert a Julian Date back to `(year, month, day_with_fraction)`.
///
/// Valid for non-negative Julian Dates.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let shifted = jd + 0.5;
    let z = shifted.floor();
    let f = shifted - z;

    let a = if z < GREGORIAN_START_Z {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 } as u32;
    let year = if month > 2 { c - 4716.0 } else { c - 4715.0 } as i32;

    (year, month, day)
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
