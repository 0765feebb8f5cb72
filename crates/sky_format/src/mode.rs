//! Output mode and numeric notation selectors.

use std::str::FromStr;

use crate::error::FormatError;

/// The six mutually exclusive coordinate representations.
///
/// Indices 1..=6 are the stable numeric codes used on the command line
/// and in configuration files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CoordinateMode {
    /// Ecliptic longitude/latitude in degrees.
    #[default]
    EclipticAngular,
    /// Ecliptic longitude as zodiac sign + degrees within the sign.
    EclipticZodiacal,
    /// Right ascension in hours, declination in degrees.
    EquatorialTime,
    /// Right ascension and declination in degrees.
    EquatorialAngular,
    /// Azimuth in hours, altitude in degrees.
    HorizontalTime,
    /// Azimuth and altitude in degrees.
    HorizontalAngular,
}

/// All modes in index order (1..=6).
pub const ALL_MODES: [CoordinateMode; 6] = [
    CoordinateMode::EclipticAngular,
    CoordinateMode::EclipticZodiacal,
    CoordinateMode::EquatorialTime,
    CoordinateMode::EquatorialAngular,
    CoordinateMode::HorizontalTime,
    CoordinateMode::HorizontalAngular,
];

impl CoordinateMode {
    /// 1-based numeric code.
    pub const fn index(self) -> u8 {
        match self {
            Self::EclipticAngular => 1,
            Self::EclipticZodiacal => 2,
            Self::EquatorialTime => 3,
            Self::EquatorialAngular => 4,
            Self::HorizontalTime => 5,
            Self::HorizontalAngular => 6,
        }
    }

    /// Short name accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::EclipticAngular => "ecliptic",
            Self::EclipticZodiacal => "zodiacal",
            Self::EquatorialTime => "equatorial-time",
            Self::EquatorialAngular => "equatorial",
            Self::HorizontalTime => "horizontal-time",
            Self::HorizontalAngular => "horizontal",
        }
    }

    /// Column headings for the two rendered components.
    pub const fn headings(self) -> (&'static str, &'static str) {
        match self {
            Self::EclipticAngular => ("longitude", "latitude"),
            Self::EclipticZodiacal => ("sign", "latitude"),
            Self::EquatorialTime | Self::EquatorialAngular => ("right ascension", "declination"),
            Self::HorizontalTime | Self::HorizontalAngular => ("azimuth", "altitude"),
        }
    }

    /// Whether the chain needs sidereal time and observer latitude.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::HorizontalTime | Self::HorizontalAngular)
    }

    /// All modes in index order.
    pub const fn all() -> &'static [CoordinateMode; 6] {
        &ALL_MODES
    }
}

impl TryFrom<u8> for CoordinateMode {
    type Error = FormatError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            1..=6 => Ok(ALL_MODES[(index - 1) as usize]),
            other => Err(FormatError::UnknownMode(other)),
        }
    }
}

impl FromStr for CoordinateMode {
    type Err = FormatError;

    /// Accepts a numeric code ("1".."6") or a name ("horizontal-time").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<u8>() {
            return Self::try_from(index);
        }
        let lower = s.to_ascii_lowercase().replace('_', "-");
        ALL_MODES
            .iter()
            .copied()
            .find(|m| m.name() == lower)
            .ok_or_else(|| FormatError::UnknownModeName(s.to_string()))
    }
}

impl std::fmt::Display for CoordinateMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Decimal vs degrees-minutes-seconds rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NumericNotation {
    #[default]
    Decimal,
    Sexagesimal,
}

impl FromStr for NumericNotation {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decimal" | "dec" => Ok(Self::Decimal),
            "sexagesimal" | "sex" | "dms" => Ok(Self::Sexagesimal),
            _ => Err(FormatError::UnknownNotation(s.to_string())),
        }
    }
}

impl std::fmt::Display for NumericNotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Decimal => "decimal",
            Self::Sexagesimal => "sexagesimal",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, m) in ALL_MODES.iter().enumerate() {
            assert_eq!(m.index() as usize, i + 1);
            assert_eq!(CoordinateMode::try_from(m.index()), Ok(*m));
        }
    }

    #[test]
    fn out_of_range_index_rejected() {
        assert_eq!(CoordinateMode::try_from(0), Err(FormatError::UnknownMode(0)));
        assert_eq!(CoordinateMode::try_from(7), Err(FormatError::UnknownMode(7)));
    }

    #[test]
    fn parse_by_name_and_number() {
        assert_eq!("5".parse(), Ok(CoordinateMode::HorizontalTime));
        assert_eq!("Zodiacal".parse(), Ok(CoordinateMode::EclipticZodiacal));
        assert_eq!("equatorial_time".parse(), Ok(CoordinateMode::EquatorialTime));
        assert!(matches!(
            "galactic".parse::<CoordinateMode>(),
            Err(FormatError::UnknownModeName(_))
        ));
        assert_eq!("9".parse::<CoordinateMode>(), Err(FormatError::UnknownMode(9)));
    }

    #[test]
    fn names_roundtrip() {
        for m in CoordinateMode::all() {
            assert_eq!(m.name().parse::<CoordinateMode>(), Ok(*m));
        }
    }

    #[test]
    fn notation_parse() {
        assert_eq!("DMS".parse(), Ok(NumericNotation::Sexagesimal));
        assert_eq!("decimal".parse(), Ok(NumericNotation::Decimal));
        assert_eq!(
            "roman".parse::<NumericNotation>(),
            Err(FormatError::UnknownNotation("roman".into()))
        );
    }
}
