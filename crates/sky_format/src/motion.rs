//! Direction of apparent motion along the ecliptic.

/// Direct (eastward) or retrograde (westward) apparent motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    Direct,
    Retrograde,
}

impl Motion {
    /// Classify a longitude rate in degrees/day. Only a negative rate is
    /// retrograde; a stationary body (rate 0) counts as direct.
    pub fn from_rate(lon_speed_deg_per_day: f64) -> Self {
        if lon_speed_deg_per_day < 0.0 {
            Self::Retrograde
        } else {
            Self::Direct
        }
    }

    /// One-letter marker appended to rendered positions.
    pub const fn marker(self) -> char {
        match self {
            Self::Direct => 'D',
            Self::Retrograde => 'R',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Retrograde => "retrograde",
        }
    }

    pub const fn is_retrograde(self) -> bool {
        matches!(self, Self::Retrograde)
    }
}
