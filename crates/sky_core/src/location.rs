//! Observer location.

use crate::error::CoreError;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180);
    /// the antimeridian is written as -180.
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a location, rejecting out-of-range or non-finite values.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, CoreError> {
        let valid = (-90.0..=90.0).contains(&latitude_deg)
            && (-180.0..180.0).contains(&longitude_deg);
        if !valid {
            return Err(CoreError::InvalidLocation {
                latitude_deg,
                longitude_deg,
            });
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Whether the azimuth is degenerate at this latitude.
    pub fn is_pole(&self) -> bool {
        self.latitude_deg.abs() >= 90.0
    }
}

impl Default for GeoLocation {
    /// Greenwich meridian on the equator.
    fn default() -> Self {
        Self {
            latitude_deg: 0.0,
            longitude_deg: 0.0,
        }
    }
}
