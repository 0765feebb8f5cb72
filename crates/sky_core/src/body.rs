//! The roster of bodies a run can report on.

use std::str::FromStr;

use crate::ephemeris::EphemerisError;

/// Major solar-system bodies, as seen from the Earth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// Default roster, in display order.
pub const ALL_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// NAIF-style body code.
    pub const fn code(self) -> i32 {
        match self {
            Self::Sun => 10,
            Self::Moon => 301,
            Self::Mercury => 199,
            Self::Venus => 299,
            Self::Mars => 499,
            Self::Jupiter => 599,
            Self::Saturn => 699,
            Self::Uranus => 799,
            Self::Neptune => 899,
            Self::Pluto => 999,
        }
    }

    /// Convert a NAIF-style body code into a [`Body`].
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            10 => Some(Self::Sun),
            301 => Some(Self::Moon),
            199 => Some(Self::Mercury),
            299 => Some(Self::Venus),
            499 => Some(Self::Mars),
            599 => Some(Self::Jupiter),
            699 => Some(Self::Saturn),
            799 => Some(Self::Uranus),
            899 => Some(Self::Neptune),
            999 => Some(Self::Pluto),
            _ => None,
        }
    }
}

impl FromStr for Body {
    type Err = EphemerisError;

    /// Case-insensitive body name, or a NAIF code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<i32>() {
            return Self::from_code(code).ok_or_else(|| EphemerisError::UnknownBody(s.to_string()));
        }
        ALL_BODIES
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| EphemerisError::UnknownBody(s.to_string()))
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_roundtrip() {
        for b in ALL_BODIES {
            assert_eq!(Body::from_code(b.code()), Some(b));
        }
        assert_eq!(Body::from_code(399), None);
    }

    #[test]
    fn parse_names() {
        assert_eq!("mars".parse::<Body>().unwrap(), Body::Mars);
        assert_eq!(" JUPITER ".parse::<Body>().unwrap(), Body::Jupiter);
        assert_eq!("301".parse::<Body>().unwrap(), Body::Moon);
        assert!(matches!(
            "vulcan".parse::<Body>(),
            Err(EphemerisError::UnknownBody(_))
        ));
    }
}
