//! Pipeline error type.

use thiserror::Error;

use crate::ephemeris::EphemerisError;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CoreError {
    #[error("invalid location: latitude {latitude_deg}, longitude {longitude_deg}")]
    InvalidLocation {
        latitude_deg: f64,
        longitude_deg: f64,
    },
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
}
