//! Per-body mapping from raw ecliptic positions to display records.

use std::fmt;

use log::{debug, trace};
use sky_format::{CoordinateMode, ModeValue, Motion, NumericNotation, evaluate};
use sky_frames::ObliquityModel;
use sky_time::Moment;

use crate::body::Body;
use crate::context::DerivedEpochContext;
use crate::ephemeris::{BodyRawPosition, EphemerisProvider};
use crate::error::CoreError;
use crate::location::GeoLocation;

/// One rendered line of output.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRecord {
    pub body: Body,
    /// Numeric components in the selected mode, before formatting.
    pub value: ModeValue,
    /// Motion marker, when shown and a rate was available.
    pub motion: Option<Motion>,
    pub text: String,
}

impl fmt::Display for DisplayRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<8} {}", self.body.name(), self.text)
    }
}

/// Output of a full run: the shared context, then one record per body.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub context: DerivedEpochContext,
    pub records: Vec<DisplayRecord>,
}

/// Rendering choices applied uniformly to every body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipeline {
    pub mode: CoordinateMode,
    pub notation: NumericNotation,
    pub show_motion: bool,
    pub obliquity: ObliquityModel,
}

impl Default for Pipeline {
    /// Ecliptic degrees, decimal, motion shown, IAU 1980 obliquity.
    fn default() -> Self {
        Self::new(CoordinateMode::default(), NumericNotation::default())
    }
}

impl Pipeline {
    pub fn new(mode: CoordinateMode, notation: NumericNotation) -> Self {
        Self {
            mode,
            notation,
            show_motion: true,
            obliquity: ObliquityModel::default(),
        }
    }

    pub fn with_motion(mut self, show_motion: bool) -> Self {
        self.show_motion = show_motion;
        self
    }

    pub fn with_obliquity(mut self, model: ObliquityModel) -> Self {
        self.obliquity = model;
        self
    }

    /// Map one raw position. Pure: reads the shared context, writes nothing.
    pub fn record(
        &self,
        ctx: &DerivedEpochContext,
        location: &GeoLocation,
        raw: &BodyRawPosition,
    ) -> DisplayRecord {
        let frame = ctx.frame(location.latitude_deg);
        let value = evaluate(self.mode, raw.lon_deg, raw.lat_deg, &frame);
        let motion = if self.show_motion {
            raw.lon_speed_deg_per_day.map(Motion::from_rate)
        } else {
            None
        };
        let text = value.render_with_motion(self.notation, motion);
        trace!("{}: lon={} lat={} -> {text}", raw.body, raw.lon_deg, raw.lat_deg);
        DisplayRecord {
            body: raw.body,
            value,
            motion,
            text,
        }
    }

    /// Lazily map raw positions in order. Calling again restarts from the
    /// first position.
    pub fn records<'a>(
        &'a self,
        ctx: &'a DerivedEpochContext,
        location: &'a GeoLocation,
        raws: &'a [BodyRawPosition],
    ) -> impl Iterator<Item = DisplayRecord> + 'a {
        raws.iter().map(move |raw| self.record(ctx, location, raw))
    }

    /// Build the context once, fetch positions, and render every body.
    pub fn run<P: EphemerisProvider + ?Sized>(
        &self,
        moment: &Moment,
        location: &GeoLocation,
        provider: &P,
        bodies: &[Body],
    ) -> Result<Report, CoreError> {
        let context = DerivedEpochContext::new(moment, location, self.obliquity);
        let raws = provider.positions(context.t, bodies)?;
        debug!(
            "rendering {} bodies in mode {} ({})",
            raws.len(),
            self.mode,
            self.notation
        );
        let records = self.records(&context, location, &raws).collect();
        Ok(Report { context, records })
    }
}
