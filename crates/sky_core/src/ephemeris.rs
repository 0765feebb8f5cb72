//! The seam to the external ephemeris.
//!
//! Orbital-series computation lives outside this workspace. A provider
//! hands back each body's geocentric ecliptic longitude, latitude and
//! distance (and optionally its longitude rate) for an epoch; the
//! pipeline never re-derives these values.

use thiserror::Error;

use crate::body::Body;

/// Un-corrected ecliptic position of one body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyRawPosition {
    pub body: Body,
    /// Ecliptic longitude λ in degrees, [0, 360).
    pub lon_deg: f64,
    /// Ecliptic latitude β in degrees.
    pub lat_deg: f64,
    /// Geocentric distance in AU. Carried through, not used by the transforms.
    pub distance_au: f64,
    /// Rate of change of λ in degrees/day; negative means retrograde.
    pub lon_speed_deg_per_day: Option<f64>,
}

/// Errors surfaced by an ephemeris provider.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    #[error("unknown body '{0}'")]
    UnknownBody(String),
    #[error("no position available for {0}")]
    MissingBody(Body),
    #[error("{0} listed more than once")]
    DuplicateBody(Body),
    #[error("invalid record for {body}: {reason}")]
    InvalidRecord { body: String, reason: String },
    #[error("ephemeris parse error: {0}")]
    Parse(String),
    #[error("I/O error: {0}")]
    Io(String),
    /// Failure reported by an external provider implementation.
    #[error("ephemeris provider failed: {0}")]
    Provider(String),
}

/// Source of raw body positions.
///
/// `t` is Julian centuries from J2000.0 (dynamical when Delta-T is applied).
/// The returned records must follow the provider's canonical body order
/// restricted to `bodies`; the pipeline preserves that order.
pub trait EphemerisProvider {
    fn positions(&self, t: f64, bodies: &[Body]) -> Result<Vec<BodyRawPosition>, EphemerisError>;
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for &P {
    fn positions(&self, t: f64, bodies: &[Body]) -> Result<Vec<BodyRawPosition>, EphemerisError> {
        (**self).positions(t, bodies)
    }
}
