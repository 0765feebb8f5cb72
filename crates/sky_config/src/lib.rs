//! Run configuration.
//!
//! A configuration is read as loose TOML ([`RawConfig`]), layered
//! (file first, then command-line overrides), and validated into a typed
//! [`RunConfig`] before anything is computed. Every failure names the key
//! and the offending value.

mod error;
mod raw;

use std::path::Path;

use log::{debug, warn};
use sky_core::{
    ALL_BODIES, Body, CoordinateMode, EspenakMeeus, FixedDeltaT, GeoLocation, Moment,
    NumericNotation, ObliquityModel, Pipeline, UtcTime,
};

pub use error::ConfigError;
pub use raw::{LocationSection, ModeSpec, RawConfig};

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub mode: CoordinateMode,
    pub notation: NumericNotation,
    /// Advance the epoch by Delta-T before the obliquity and ephemeris steps.
    pub dynamical_time: bool,
    /// Fixed Delta-T in seconds; `None` uses the Espenak–Meeus polynomials.
    pub delta_t_seconds: Option<f64>,
    pub obliquity_model: ObliquityModel,
    pub show_motion: bool,
    pub location: GeoLocation,
    pub bodies: Vec<Body>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: CoordinateMode::EclipticAngular,
            notation: NumericNotation::Decimal,
            dynamical_time: false,
            delta_t_seconds: None,
            obliquity_model: ObliquityModel::Iau1980,
            show_motion: true,
            location: GeoLocation::default(),
            bodies: ALL_BODIES.to_vec(),
        }
    }
}

impl RunConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        Self::from_raw(RawConfig::from_toml_str(src)?)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_raw(RawConfig::load(path)?)
    }

    /// Validate a raw layer, filling unset keys with defaults.
    pub fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let mode = match raw.mode {
            None => defaults.mode,
            Some(ModeSpec::Index(i)) => u8::try_from(i)
                .ok()
                .and_then(|i| CoordinateMode::try_from(i).ok())
                .ok_or_else(|| ConfigError::invalid("mode", i, "expected 1-6"))?,
            Some(ModeSpec::Name(name)) => name
                .parse()
                .map_err(|e| ConfigError::invalid("mode", &name, e))?,
        };

        let notation = match raw.notation {
            None => defaults.notation,
            Some(s) => s
                .parse()
                .map_err(|e| ConfigError::invalid("notation", &s, e))?,
        };

        let obliquity_model = match raw.obliquity_model {
            None => defaults.obliquity_model,
            Some(s) => s
                .parse()
                .map_err(|e| ConfigError::invalid("obliquity_model", &s, e))?,
        };

        let dynamical_time = raw.dynamical_time.unwrap_or(defaults.dynamical_time);
        if let Some(dt) = raw.delta_t_seconds {
            if !dt.is_finite() {
                return Err(ConfigError::invalid("delta_t_seconds", dt, "must be finite"));
            }
            if !dynamical_time {
                warn!("delta_t_seconds = {dt} ignored: dynamical_time is off");
            }
        }

        let location = match raw.location {
            None => defaults.location,
            Some(loc) => {
                let lat = loc.latitude.unwrap_or(defaults.location.latitude_deg);
                let lon = loc.longitude.unwrap_or(defaults.location.longitude_deg);
                GeoLocation::new(lat, lon).map_err(|e| {
                    ConfigError::invalid("location", format!("{lat}, {lon}"), e)
                })?
            }
        };

        let bodies = match raw.bodies {
            None => defaults.bodies,
            Some(names) => parse_bodies(&names)?,
        };

        let config = Self {
            mode,
            notation,
            dynamical_time,
            delta_t_seconds: raw.delta_t_seconds,
            obliquity_model,
            show_motion: raw.show_motion.unwrap_or(defaults.show_motion),
            location,
            bodies,
        };
        debug!("run config: {config:?}");
        Ok(config)
    }

    /// The civil instant placed on the configured time axis.
    pub fn moment(&self, utc: UtcTime) -> Moment {
        if !self.dynamical_time {
            return Moment::from_utc(utc, None);
        }
        match self.delta_t_seconds {
            Some(dt) => Moment::from_utc(utc, Some(&FixedDeltaT(dt))),
            None => Moment::from_utc(utc, Some(&EspenakMeeus)),
        }
    }

    pub fn pipeline(&self) -> Pipeline {
        Pipeline::new(self.mode, self.notation)
            .with_motion(self.show_motion)
            .with_obliquity(self.obliquity_model)
    }
}

fn parse_bodies(names: &[String]) -> Result<Vec<Body>, ConfigError> {
    if names.is_empty() {
        return Err(ConfigError::invalid("bodies", "[]", "at least one body is required"));
    }
    let mut bodies = Vec::with_capacity(names.len());
    for name in names {
        let body: Body = name
            .parse()
            .map_err(|e| ConfigError::invalid("bodies", name, e))?;
        if bodies.contains(&body) {
            return Err(ConfigError::invalid("bodies", name, "listed more than once"));
        }
        bodies.push(body);
    }
    Ok(bodies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(RunConfig::from_toml_str("").unwrap(), RunConfig::default());
    }

    #[test]
    fn full_document() {
        let src = r#"
mode = 3
notation = "sexagesimal"
dynamical_time = true
delta_t_seconds = 69.2
obliquity_model = "iau2006"
show_motion = false
bodies = ["Sun", "moon", "Mars"]

[location]
latitude = 40.7128
longitude = -74.006
"#;
        let c = RunConfig::from_toml_str(src).unwrap();
        assert_eq!(c.mode, CoordinateMode::EquatorialTime);
        assert_eq!(c.notation, NumericNotation::Sexagesimal);
        assert!(c.dynamical_time);
        assert_eq!(c.delta_t_seconds, Some(69.2));
        assert_eq!(c.obliquity_model, ObliquityModel::Iau2006);
        assert!(!c.show_motion);
        assert_eq!(c.bodies, vec![Body::Sun, Body::Moon, Body::Mars]);
        assert_eq!(c.location.longitude_deg, -74.006);
    }

    #[test]
    fn mode_by_name() {
        let c = RunConfig::from_toml_str("mode = \"horizontal-time\"").unwrap();
        assert_eq!(c.mode, CoordinateMode::HorizontalTime);
    }

    #[test]
    fn fixed_delta_t_only_when_dynamical() {
        let utc = UtcTime::new(2024, 1, 1, 0, 0, 0.0);
        let off = RunConfig::from_toml_str("delta_t_seconds = 60.0").unwrap();
        assert!(!off.moment(utc).is_dynamical());

        let on = RunConfig::from_toml_str("dynamical_time = true\ndelta_t_seconds = 60.0").unwrap();
        assert_eq!(on.moment(utc).delta_t_seconds(), Some(60.0));

        let model = RunConfig::from_toml_str("dynamical_time = true").unwrap();
        let dt = model.moment(utc).delta_t_seconds().unwrap();
        assert!((dt - 73.9).abs() < 0.5, "ΔT = {dt}");
    }

    #[test]
    fn pipeline_reflects_config() {
        let c = RunConfig::from_toml_str("mode = 6\nshow_motion = false").unwrap();
        let p = c.pipeline();
        assert_eq!(p.mode, CoordinateMode::HorizontalAngular);
        assert!(!p.show_motion);
        assert_eq!(p.obliquity, ObliquityModel::Iau1980);
    }

    #[test]
    fn obliquity_model_error_names_value() {
        let err = RunConfig::from_toml_str("obliquity_model = \"laskar\"").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid obliquity_model = laskar: unknown obliquity model 'laskar' (expected iau1980 or iau2006)"
        );
    }
}
