//! Table-backed ephemeris provider.
//!
//! Serves pre-computed positions loaded from TOML:
//!
//! ```toml
//! epoch_jd = 2460389.629
//!
//! [[body]]
//! name = "Mars"
//! lon = 331.2041
//! lat = -1.0577
//! distance = 2.2413
//! speed = 0.7741
//! ```
//!
//! `epoch_jd`, `distance` and `speed` are optional. The table order is the
//! provider's canonical order.

use std::collections::HashSet;
use std::path::Path;

use log::{debug, warn};
use serde::Deserialize;
use sky_frames::normalize_deg;
use sky_time::{DAYS_PER_CENTURY, J2000_JD};

use crate::body::Body;
use crate::ephemeris::{BodyRawPosition, EphemerisError, EphemerisProvider};

/// Largest epoch mismatch served without a warning, in days.
const EPOCH_TOLERANCE_DAYS: f64 = 1.0;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    epoch_jd: Option<f64>,
    #[serde(default)]
    body: Vec<TableRow>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableRow {
    name: String,
    lon: f64,
    lat: f64,
    #[serde(default)]
    distance: f64,
    speed: Option<f64>,
}

/// Provider backed by a fixed list of positions.
#[derive(Debug, Clone, PartialEq)]
pub struct TableEphemeris {
    epoch_jd: Option<f64>,
    rows: Vec<BodyRawPosition>,
}

impl TableEphemeris {
    /// Build from already-validated positions. Longitudes are normalized.
    pub fn from_positions(
        epoch_jd: Option<f64>,
        positions: Vec<BodyRawPosition>,
    ) -> Result<Self, EphemerisError> {
        let mut seen = HashSet::new();
        let mut rows = Vec::with_capacity(positions.len());
        for mut p in positions {
            if !seen.insert(p.body) {
                return Err(EphemerisError::DuplicateBody(p.body));
            }
            check_row(&p)?;
            p.lon_deg = normalize_deg(p.lon_deg);
            rows.push(p);
        }
        Ok(Self { epoch_jd, rows })
    }

    /// Parse a TOML table.
    pub fn from_toml_str(src: &str) -> Result<Self, EphemerisError> {
        let file: TableFile =
            toml::from_str(src).map_err(|e| EphemerisError::Parse(e.to_string()))?;
        let positions = file
            .body
            .into_iter()
            .map(|row| {
                Ok(BodyRawPosition {
                    body: row.name.parse()?,
                    lon_deg: row.lon,
                    lat_deg: row.lat,
                    distance_au: row.distance,
                    lon_speed_deg_per_day: row.speed,
                })
            })
            .collect::<Result<Vec<_>, EphemerisError>>()?;
        Self::from_positions(file.epoch_jd, positions)
    }

    /// Load a TOML table from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EphemerisError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)
            .map_err(|e| EphemerisError::Io(format!("{}: {e}", path.display())))?;
        let table = Self::from_toml_str(&src)?;
        debug!(
            "loaded {} ephemeris rows from {}",
            table.rows.len(),
            path.display()
        );
        Ok(table)
    }

    /// Epoch the table was computed for, if recorded.
    pub fn epoch_jd(&self) -> Option<f64> {
        self.epoch_jd
    }

    /// Bodies present, in table order.
    pub fn bodies(&self) -> impl Iterator<Item = Body> + '_ {
        self.rows.iter().map(|r| r.body)
    }
}

fn check_row(p: &BodyRawPosition) -> Result<(), EphemerisError> {
    let invalid = |reason: &str| EphemerisError::InvalidRecord {
        body: p.body.name().to_string(),
        reason: reason.to_string(),
    };
    if !p.lon_deg.is_finite() {
        return Err(invalid("longitude is not finite"));
    }
    if !(-90.0..=90.0).contains(&p.lat_deg) {
        return Err(invalid("latitude outside [-90, 90]"));
    }
    if !(p.distance_au.is_finite() && p.distance_au >= 0.0) {
        return Err(invalid("distance must be a non-negative number"));
    }
    if p.lon_speed_deg_per_day.is_some_and(|s| !s.is_finite()) {
        return Err(invalid("speed is not finite"));
    }
    Ok(())
}

impl EphemerisProvider for TableEphemeris {
    fn positions(&self, t: f64, bodies: &[Body]) -> Result<Vec<BodyRawPosition>, EphemerisError> {
        if let Some(epoch) = self.epoch_jd {
            let requested = J2000_JD + t * DAYS_PER_CENTURY;
            let gap = (requested - epoch).abs();
            if gap > EPOCH_TOLERANCE_DAYS {
                warn!(
                    "ephemeris table epoch JD {epoch:.5} is {gap:.2} days from requested JD {requested:.5}"
                );
            }
        }
        if let Some(missing) = bodies.iter().find(|b| !self.rows.iter().any(|r| r.body == **b)) {
            return Err(EphemerisError::MissingBody(*missing));
        }
        Ok(self
            .rows
            .iter()
            .filter(|r| bodies.contains(&r.body))
            .copied()
            .collect())
    }
}
