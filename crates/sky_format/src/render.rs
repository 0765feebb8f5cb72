//! Mode dispatch and rendering.
//!
//! | mode              | chain                                  | primary      |
//! |-------------------|----------------------------------------|--------------|
//! | EclipticAngular   | identity                               | λ degrees    |
//! | EclipticZodiacal  | λ → sign + degrees in sign             | sign, deg    |
//! | EquatorialTime    | ecliptic → equatorial                  | α / 15 hours |
//! | EquatorialAngular | ecliptic → equatorial                  | α degrees    |
//! | HorizontalTime    | → equatorial, H = LST·15 − α, → horizontal | A / 15 hours |
//! | HorizontalAngular | same                                   | A degrees    |
//!
//! The secondary component is always the signed latitude-like value
//! (β, δ or h).

use sky_frames::{
    HorizontalCoords, ecliptic_to_equatorial, equatorial_to_horizontal, hour_angle_deg,
    normalize_deg, normalize_hours,
};

use crate::mode::{CoordinateMode, NumericNotation};
use crate::motion::Motion;
use crate::sexagesimal::{Quantity, format_quantity, round_longitude};
use crate::zodiac::{SignPosition, sign_from_longitude};

/// Epoch- and site-dependent inputs shared by every body in a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// Obliquity of the ecliptic ε in degrees.
    pub obliquity_deg: f64,
    /// Local sidereal time in hours, [0, 24).
    pub lst_hours: f64,
    /// Observer latitude φ in degrees.
    pub latitude_deg: f64,
}

/// The two components produced by one coordinate mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModeValue {
    Ecliptic { lon_deg: f64, lat_deg: f64 },
    Zodiacal { lon_deg: f64, lat_deg: f64 },
    EquatorialTime { ra_hours: f64, dec_deg: f64 },
    EquatorialAngular { ra_deg: f64, dec_deg: f64 },
    HorizontalTime { azimuth_hours: f64, altitude_deg: f64 },
    HorizontalAngular { azimuth_deg: f64, altitude_deg: f64 },
}

impl ModeValue {
    /// The mode that produced this value.
    pub fn mode(&self) -> CoordinateMode {
        match self {
            Self::Ecliptic { .. } => CoordinateMode::EclipticAngular,
            Self::Zodiacal { .. } => CoordinateMode::EclipticZodiacal,
            Self::EquatorialTime { .. } => CoordinateMode::EquatorialTime,
            Self::EquatorialAngular { .. } => CoordinateMode::EquatorialAngular,
            Self::HorizontalTime { .. } => CoordinateMode::HorizontalTime,
            Self::HorizontalAngular { .. } => CoordinateMode::HorizontalAngular,
        }
    }

    /// `(primary, secondary)` as raw numbers. For the zodiacal mode the
    /// primary is the full ecliptic longitude.
    pub fn components(&self) -> (f64, f64) {
        match *self {
            Self::Ecliptic { lon_deg, lat_deg } | Self::Zodiacal { lon_deg, lat_deg } => {
                (lon_deg, lat_deg)
            }
            Self::EquatorialTime { ra_hours, dec_deg } => (ra_hours, dec_deg),
            Self::EquatorialAngular { ra_deg, dec_deg } => (ra_deg, dec_deg),
            Self::HorizontalTime {
                azimuth_hours,
                altitude_deg,
            } => (azimuth_hours, altitude_deg),
            Self::HorizontalAngular {
                azimuth_deg,
                altitude_deg,
            } => (azimuth_deg, altitude_deg),
        }
    }

    /// Sign and in-sign degrees, for the zodiacal mode only.
    pub fn sign_position(&self) -> Option<SignPosition> {
        match *self {
            Self::Zodiacal { lon_deg, .. } => Some(sign_from_longitude(lon_deg)),
            _ => None,
        }
    }

    /// Render both components, separated by two spaces.
    pub fn render(&self, notation: NumericNotation) -> String {
        let (primary, secondary) = self.components();
        let first = match self {
            Self::Zodiacal { .. } => {
                // Round before splitting so 29°59'59.97" becomes the next sign at 0°.
                let pos = sign_from_longitude(round_longitude(primary, notation));
                format!(
                    "{} {}",
                    pos.sign.name(),
                    format_quantity(pos.degrees_in_sign, Quantity::Angle, notation)
                )
            }
            Self::EquatorialTime { .. } | Self::HorizontalTime { .. } => {
                format_quantity(primary, Quantity::Hours, notation)
            }
            _ => format_quantity(primary, Quantity::Angle, notation),
        };
        let second = format_quantity(secondary, Quantity::Signed, notation);
        format!("{first}  {second}")
    }

    /// Render, appending the motion marker when a rate was available.
    pub fn render_with_motion(&self, notation: NumericNotation, motion: Option<Motion>) -> String {
        let text = self.render(notation);
        match motion {
            Some(m) => format!("{text}  {}", m.marker()),
            None => text,
        }
    }
}

fn to_horizontal(lon_deg: f64, lat_deg: f64, ctx: &FrameContext) -> HorizontalCoords {
    let eq = ecliptic_to_equatorial(lon_deg, lat_deg, ctx.obliquity_deg);
    let h = hour_angle_deg(ctx.lst_hours, eq.ra_deg);
    equatorial_to_horizontal(h, eq.dec_deg, ctx.latitude_deg)
}

/// Run the frame chain selected by `mode` for one ecliptic position.
pub fn evaluate(mode: CoordinateMode, lon_deg: f64, lat_deg: f64, ctx: &FrameContext) -> ModeValue {
    match mode {
        CoordinateMode::EclipticAngular => ModeValue::Ecliptic {
            lon_deg: normalize_deg(lon_deg),
            lat_deg,
        },
        CoordinateMode::EclipticZodiacal => ModeValue::Zodiacal {
            lon_deg: normalize_deg(lon_deg),
            lat_deg,
        },
        CoordinateMode::EquatorialTime => {
            let eq = ecliptic_to_equatorial(lon_deg, lat_deg, ctx.obliquity_deg);
            ModeValue::EquatorialTime {
                ra_hours: eq.ra_hours(),
                dec_deg: eq.dec_deg,
            }
        }
        CoordinateMode::EquatorialAngular => {
            let eq = ecliptic_to_equatorial(lon_deg, lat_deg, ctx.obliquity_deg);
            ModeValue::EquatorialAngular {
                ra_deg: eq.ra_deg,
                dec_deg: eq.dec_deg,
            }
        }
        CoordinateMode::HorizontalTime => {
            let hz = to_horizontal(lon_deg, lat_deg, ctx);
            ModeValue::HorizontalTime {
                azimuth_hours: normalize_hours(hz.azimuth_deg / 15.0),
                altitude_deg: hz.altitude_deg,
            }
        }
        CoordinateMode::HorizontalAngular => {
            let hz = to_horizontal(lon_deg, lat_deg, ctx);
            ModeValue::HorizontalAngular {
                azimuth_deg: hz.azimuth_deg,
                altitude_deg: hz.altitude_deg,
            }
        }
    }
}

/// Render one body's position in the given mode and notation.
pub fn render(
    mode: CoordinateMode,
    notation: NumericNotation,
    lon_deg: f64,
    lat_deg: f64,
    obliquity_deg: f64,
    lst_hours: f64,
    latitude_deg: f64,
) -> String {
    let ctx = FrameContext {
        obliquity_deg,
        lst_hours,
        latitude_deg,
    };
    evaluate(mode, lon_deg, lat_deg, &ctx).render(notation)
}
