//! Frame conversion helpers for apparent positions.
//!
//! Provides the obliquity of the ecliptic and the spherical-coordinate
//! transforms ecliptic ↔ equatorial → horizontal. All angles are degrees.

pub mod angle;
pub mod equatorial;
pub mod error;
pub mod horizontal;
pub mod obliquity;

pub use angle::{normalize_deg, normalize_hours};
pub use equatorial::{
    EclipticCoords, EquatorialCoords, ecliptic_to_equatorial, equatorial_to_ecliptic,
};
pub use error::FrameError;
pub use horizontal::{HorizontalCoords, equatorial_to_horizontal, hour_angle_deg};
pub use obliquity::{OBLIQUITY_J2000_DEG, ObliquityModel, mean_obliquity_deg};
