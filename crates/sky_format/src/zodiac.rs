//! Zodiac signs of the tropical ecliptic.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at the vernal equinox (λ = 0°).

use sky_frames::normalize_deg;

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Three-letter abbreviation.
    pub fn abbreviation(self) -> &'static str {
        &self.name()[..3]
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Ecliptic longitude where the sign begins.
    pub const fn start_deg(self) -> f64 {
        self.index() as f64 * 30.0
    }
}

/// Position of a longitude within its sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignPosition {
    pub sign: ZodiacSign,
    /// Decimal degrees within the sign, [0.0, 30.0).
    pub degrees_in_sign: f64,
}

/// Determine the sign from an ecliptic longitude in degrees.
///
/// Each sign spans exactly 30 degrees: Aries = [0, 30), Taurus = [30, 60), etc.
pub fn sign_from_longitude(lon_deg: f64) -> SignPosition {
    let lon = normalize_deg(lon_deg);
    // Clamp to 11 in case of floating point edge just below 360.0
    let idx = ((lon / 30.0).floor() as usize).min(11);
    SignPosition {
        sign: ALL_SIGNS[idx],
        degrees_in_sign: lon - idx as f64 * 30.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn abbreviations() {
        assert_eq!(ZodiacSign::Sagittarius.abbreviation(), "Sag");
        assert_eq!(ZodiacSign::Leo.abbreviation(), "Leo");
    }

    #[test]
    fn all_boundaries() {
        for s in ALL_SIGNS {
            let p = sign_from_longitude(s.start_deg());
            assert_eq!(p.sign, s);
            assert!(p.degrees_in_sign.abs() < 1e-10);
        }
    }

    #[test]
    fn mid_sign() {
        let p = sign_from_longitude(135.5);
        assert_eq!(p.sign, ZodiacSign::Leo);
        assert!((p.degrees_in_sign - 15.5).abs() < 1e-10);
    }

    #[test]
    fn wrap_around_and_negative() {
        let p = sign_from_longitude(365.0);
        assert_eq!(p.sign, ZodiacSign::Aries);
        assert!((p.degrees_in_sign - 5.0).abs() < 1e-10);

        let p = sign_from_longitude(-10.0);
        assert_eq!(p.sign, ZodiacSign::Pisces);
        assert!((p.degrees_in_sign - 20.0).abs() < 1e-10);
    }
}
