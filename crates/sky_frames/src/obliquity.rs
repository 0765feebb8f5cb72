//! Mean obliquity of the ecliptic.
//!
//! Two polynomial models in Julian centuries `t` from J2000.0:
//!
//! - IAU 1980 (Lieske et al. 1977), as given in Meeus eq. 22.2.
//! - IAU 2006 (Hilton et al. 2006), IERS Conventions 2010 eq. 5.40.
//!
//! Both are valid for a few millennia around J2000. Any `t` is accepted;
//! far outside that window the polynomials drift and accuracy is not
//! guaranteed.

use crate::error::FrameError;

/// Mean obliquity at J2000.0 in degrees (IAU 1980: 23°26'21.448").
pub const OBLIQUITY_J2000_DEG: f64 = 84_381.448 / 3600.0;

/// Polynomial model used for the obliquity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ObliquityModel {
    #[default]
    Iau1980,
    Iau2006,
}

impl ObliquityModel {
    /// Mean obliquity in degrees at `t` Julian centuries from J2000.0.
    pub fn obliquity_deg(self, t: f64) -> f64 {
        let t2 = t * t;
        let t3 = t2 * t;
        let arcsec = match self {
            Self::Iau1980 => 84_381.448 - 46.8150 * t - 0.00059 * t2 + 0.001813 * t3,
            Self::Iau2006 => {
                let t4 = t3 * t;
                let t5 = t4 * t;
                84_381.406 - 46.836_769 * t - 0.000_183_1 * t2 + 0.002_003_40 * t3
                    - 0.000_000_576 * t4
                    - 0.000_000_043_4 * t5
            }
        };
        arcsec / 3600.0
    }

    /// Short lowercase name, as used in configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Iau1980 => "iau1980",
            Self::Iau2006 => "iau2006",
        }
    }
}

impl std::str::FromStr for ObliquityModel {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iau1980" | "1980" => Ok(Self::Iau1980),
            "iau2006" | "2006" => Ok(Self::Iau2006),
            _ => Err(FrameError::UnknownObliquityModel(s.to_string())),
        }
    }
}

/// Mean obliquity in degrees, IAU 1980 model.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    ObliquityModel::Iau1980.obliquity_deg(t)
}
