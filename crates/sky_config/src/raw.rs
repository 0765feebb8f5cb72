//! Loose, file-shaped configuration layer.

use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::ConfigError;

/// A coordinate mode as written: `mode = 3` or `mode = "equatorial"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ModeSpec {
    Index(i64),
    Name(String),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationSection {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Unvalidated settings; every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    pub mode: Option<ModeSpec>,
    pub notation: Option<String>,
    pub dynamical_time: Option<bool>,
    pub delta_t_seconds: Option<f64>,
    pub obliquity_model: Option<String>,
    pub show_motion: Option<bool>,
    pub location: Option<LocationSection>,
    pub bodies: Option<Vec<String>>,
}

impl RawConfig {
    pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
        toml::from_str(src).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        debug!("read config from {}", path.display());
        Self::from_toml_str(&src)
    }

    /// Layer `over` on top of `self`; keys set in `over` win.
    pub fn merge(self, over: RawConfig) -> RawConfig {
        let location = match (self.location, over.location) {
            (Some(base), Some(top)) => Some(LocationSection {
                latitude: top.latitude.or(base.latitude),
                longitude: top.longitude.or(base.longitude),
            }),
            (base, top) => top.or(base),
        };
        RawConfig {
            mode: over.mode.or(self.mode),
            notation: over.notation.or(self.notation),
            dynamical_time: over.dynamical_time.or(self.dynamical_time),
            delta_t_seconds: over.delta_t_seconds.or(self.delta_t_seconds),
            obliquity_model: over.obliquity_model.or(self.obliquity_model),
            show_motion: over.show_motion.or(self.show_motion),
            location,
            bodies: over.bodies.or(self.bodies),
        }
    }
}
