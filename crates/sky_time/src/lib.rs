//! Time-scale support for the position pipeline.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions (Julian/Gregorian, continuous across 1582)
//! - A `UtcTime` civil instant with ISO-8601 parsing and display
//! - Delta-T models (TT − UT) behind the [`DeltaT`] trait
//! - A `Moment` type carrying the JD and the (optionally dynamical) centuries
//! - Greenwich and local mean sidereal time

pub mod delta_t;
pub mod error;
pub mod julian;
pub mod scales;
pub mod sidereal;
pub mod utc_time;

pub use delta_t::{DeltaT, EspenakMeeus, FixedDeltaT, decimal_year};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, jd_to_centuries,
};
pub use scales::{Moment, to_dynamical_centuries};
pub use sidereal::{gmst_deg, gmst_hours, local_sidereal_time_hours};
pub use utc_time::UtcTime;
