//! Epoch- and site-derived values shared by every body in a run.

use log::debug;
use sky_format::FrameContext;
use sky_frames::ObliquityModel;
use sky_time::{Moment, local_sidereal_time_hours};

use crate::location::GeoLocation;

/// Values derived once per run and read by every per-body step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedEpochContext {
    /// Julian centuries since J2000.0 (dynamical when Delta-T applied).
    pub t: f64,
    /// Obliquity of the ecliptic in degrees.
    pub obliquity_deg: f64,
    /// Local sidereal time in hours, [0, 24).
    pub lst_hours: f64,
}

impl DerivedEpochContext {
    /// Obliquity follows `t`; sidereal time follows the UT Julian Date.
    pub fn new(moment: &Moment, location: &GeoLocation, model: ObliquityModel) -> Self {
        let t = moment.centuries();
        let ctx = Self {
            t,
            obliquity_deg: model.obliquity_deg(t),
            lst_hours: local_sidereal_time_hours(moment.jd_ut(), location.longitude_deg),
        };
        debug!(
            "epoch context: utc={} t={:.10} eps={:.6} ({}) lst={:.6}h dT={:?}",
            moment.utc(),
            ctx.t,
            ctx.obliquity_deg,
            model.name(),
            ctx.lst_hours,
            moment.delta_t_seconds()
        );
        ctx
    }

    /// Formatter inputs for an observer at `latitude_deg`.
    pub fn frame(&self, latitude_deg: f64) -> FrameContext {
        FrameContext {
            obliquity_deg: self.obliquity_deg,
            lst_hours: self.lst_hours,
            latitude_deg,
        }
    }
}
