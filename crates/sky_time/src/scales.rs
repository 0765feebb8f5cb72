//! Civil → dynamical time for epoch-dependent quantities.
//!
//! A [`Moment`] pins a UTC instant to its Julian Date and to the Julian
//! centuries `t` used downstream by the obliquity model and the ephemeris.
//! When a Delta-T model is supplied, `t` is advanced by ΔT so it lies on
//! the dynamical (TT) axis; sidereal time keeps using the UT Julian Date.

use crate::delta_t::DeltaT;
use crate::julian::{DAYS_PER_CENTURY, SECONDS_PER_DAY, jd_to_centuries};
use crate::utc_time::UtcTime;

/// An immutable instant with its derived time-scale values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moment {
    utc: UtcTime,
    jd_ut: f64,
    delta_t_s: Option<f64>,
    t: f64,
}

impl Moment {
    /// Build a moment from a civil instant.
    ///
    /// With `delta_t = None` the centuries stay on the UT axis.
    pub fn from_utc(utc: UtcTime, delta_t: Option<&dyn DeltaT>) -> Self {
        let jd_ut = utc.to_jd();
        let delta_t_s = delta_t.map(|model| model.delta_t_seconds(jd_ut));
        let t = advance_centuries(jd_to_centuries(jd_ut), delta_t_s);
        Self {
            utc,
            jd_ut,
            delta_t_s,
            t,
        }
    }

    /// The civil instant this moment was built from.
    pub fn utc(&self) -> UtcTime {
        self.utc
    }

    /// Julian Date on the UT axis.
    pub fn jd_ut(&self) -> f64 {
        self.jd_ut
    }

    /// Julian centuries since J2000.0, dynamical if Delta-T was applied.
    pub fn centuries(&self) -> f64 {
        self.t
    }

    /// Applied Delta-T in seconds, if any.
    pub fn delta_t_seconds(&self) -> Option<f64> {
        self.delta_t_s
    }

    /// Whether `centuries()` is on the dynamical axis.
    pub fn is_dynamical(&self) -> bool {
        self.delta_t_s.is_some()
    }

    /// Julian Date advanced by the applied Delta-T (equals `jd_ut` otherwise).
    pub fn jd_dynamical(&self) -> f64 {
        self.jd_ut + self.delta_t_s.unwrap_or(0.0) / SECONDS_PER_DAY
    }
}

fn advance_centuries(t0: f64, delta_t_s: Option<f64>) -> f64 {
    match delta_t_s {
        Some(dt) => t0 + dt / SECONDS_PER_DAY / DAYS_PER_CENTURY,
        None => t0,
    }
}

/// Julian centuries of `utc` since J2000.0, optionally advanced by Delta-T.
pub fn to_dynamical_centuries(utc: &UtcTime, apply_delta_t: bool, model: &dyn DeltaT) -> f64 {
    let delta_t = if apply_delta_t { Some(model) } else { None };
    Moment::from_utc(*utc, delta_t).centuries()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delta_t::{EspenakMeeus, FixedDeltaT};
    use crate::julian::J2000_JD;

    fn j2000_noon() -> UtcTime {
        UtcTime::new(2000, 1, 1, 12, 0, 0.0)
    }

    #[test]
    fn civil_moment_at_j2000() {
        let m = Moment::from_utc(j2000_noon(), None);
        assert_eq!(m.jd_ut(), J2000_JD);
        assert_eq!(m.centuries(), 0.0);
        assert!(!m.is_dynamical());
        assert_eq!(m.jd_dynamical(), J2000_JD);
    }

    #[test]
    fn delta_t_advances_centuries() {
        let m = Moment::from_utc(j2000_noon(), Some(&FixedDeltaT(86_400.0)));
        assert_eq!(m.delta_t_seconds(), Some(86_400.0));
        assert!((m.centuries() - 1.0 / DAYS_PER_CENTURY).abs() < 1e-15);
        assert!((m.jd_dynamical() - (J2000_JD + 1.0)).abs() < 1e-9);
        // UT JD is untouched.
        assert_eq!(m.jd_ut(), J2000_JD);
    }

    #[test]
    fn to_dynamical_respects_flag() {
        let utc = j2000_noon();
        assert_eq!(to_dynamical_centuries(&utc, false, &EspenakMeeus), 0.0);
        let t = to_dynamical_centuries(&utc, true, &EspenakMeeus);
        let expected = 63.86 / SECONDS_PER_DAY / DAYS_PER_CENTURY;
        assert!((t - expected).abs() < 1e-15, "t = {t}");
    }
}
