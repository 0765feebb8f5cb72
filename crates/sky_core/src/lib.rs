//! Apparent-position pipeline.
//!
//! A run is: build a [`DerivedEpochContext`] once from the moment and the
//! observer, fetch raw ecliptic positions from an [`EphemerisProvider`],
//! then map each through the [`Pipeline`] into a [`DisplayRecord`]. The
//! context is immutable and shared by every body; the per-body step is a
//! pure function, so records come out in the provider's order.

pub mod body;
pub mod context;
pub mod ephemeris;
pub mod error;
pub mod location;
pub mod pipeline;
pub mod table;

pub use body::{ALL_BODIES, Body};
pub use context::DerivedEpochContext;
pub use ephemeris::{BodyRawPosition, EphemerisError, EphemerisProvider};
pub use error::CoreError;
pub use location::GeoLocation;
pub use pipeline::{DisplayRecord, Pipeline, Report};
pub use table::TableEphemeris;

// Re-export the types callers need to drive a run without extra deps.
pub use sky_format::{CoordinateMode, Motion, NumericNotation};
pub use sky_frames::ObliquityModel;
pub use sky_time::{DeltaT, EspenakMeeus, FixedDeltaT, Moment, UtcTime};
