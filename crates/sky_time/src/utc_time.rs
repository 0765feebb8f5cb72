//! UTC calendar date/time with sub-second precision.
//!
//! `UtcTime` is the civil instant fed into the pipeline. Parsing lives here
//! so callers can hand the core an already-validated value.

use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Build a `UtcTime`, rejecting fields outside their calendar range.
    ///
    /// Seconds up to (but excluding) 61 are accepted for leap seconds.
    pub fn checked(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        let out_of_range = |field, value: f64| TimeError::FieldOutOfRange { field, value };
        if !(1..=12).contains(&month) {
            return Err(out_of_range("month", month as f64));
        }
        if day == 0 || day > days_in_month(year, month) || in_reform_gap(year, month, day) {
            return Err(out_of_range("day", day as f64));
        }
        if hour > 23 {
            return Err(out_of_range("hour", hour as f64));
        }
        if minute > 59 {
            return Err(out_of_range("minute", minute as f64));
        }
        if !(0.0..61.0).contains(&second) {
            return Err(out_of_range("second", second));
        }
        Ok(Self::new(year, month, day, hour, minute, second))
    }

    /// Fraction of the day elapsed, plus the day number.
    fn day_fraction(&self) -> f64 {
        self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0
    }

    /// Julian Date of this instant on the UT axis.
    pub fn to_jd(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day_fraction())
    }

    /// Convert a UT Julian Date back to a calendar instant.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day_frac) = jd_to_calendar(jd);
        let day = day_frac.floor() as u32;
        let total_seconds = day_frac.fract() * 86_400.0;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

/// Number of days in a month, honouring the Julian leap rule before 1583.
/// 1582-10-05 through 1582-10-14 were skipped by the Gregorian reform.
fn in_reform_gap(year: i32, month: u32, day: u32) -> bool {
    year == 1582 && month == 10 && (5..=14).contains(&day)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            let leap = if year > 1582 {
                (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
            } else {
                year.rem_euclid(4) == 0
            };
            if leap { 29 } else { 28 }
        }
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm:ss[.fff][Z]` or a bare `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let fail = |reason: &str| TimeError::Parse {
            input: input.to_string(),
            reason: reason.to_string(),
        };

        let body = input.trim_end_matches('Z');
        let (date, time) = match body.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t)),
            None => (body, None),
        };

        // A leading '-' belongs to the year, not to the separator.
        let (negative, date) = match date.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, date),
        };
        let date_parts: Vec<&str> = date.split('-').collect();
        if date_parts.len() != 3 {
            return Err(fail("expected YYYY-MM-DD"));
        }
        let year: i32 = date_parts[0].parse().map_err(|_| fail("bad year"))?;
        let year = if negative { -year } else { year };
        let month: u32 = date_parts[1].parse().map_err(|_| fail("bad month"))?;
        let day: u32 = date_parts[2].parse().map_err(|_| fail("bad day"))?;

        let (hour, minute, second) = match time {
            None => (0, 0, 0.0),
            Some(t) => {
                let time_parts: Vec<&str> = t.split(':').collect();
                if time_parts.len() < 2 || time_parts.len() > 3 {
                    return Err(fail("expected hh:mm[:ss]"));
                }
                let hour: u32 = time_parts[0].parse().map_err(|_| fail("bad hour"))?;
                let minute: u32 = time_parts[1].parse().map_err(|_| fail("bad minute"))?;
                let second: f64 = match time_parts.get(2) {
                    Some(sec) => sec.parse().map_err(|_| fail("bad second"))?,
                    None => 0.0,
                };
                (hour, minute, second)
            }
        };

        Self::checked(year, month, day, hour, minute, second)
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}
