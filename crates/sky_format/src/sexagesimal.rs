//! Decimal and sexagesimal number rendering.
//!
//! Values are first rounded to an integer number of display ticks
//! (1e-4 units for decimal, 0.1 second for sexagesimal) and only then
//! split or wrapped, so a carry never produces `60.0"` or `360°` on screen.

use crate::error::FormatError;
use crate::mode::NumericNotation;

/// Decimal ticks per unit (4 decimal places).
const DECIMAL_SCALE: i64 = 10_000;
/// Sexagesimal ticks per unit (tenths of a second).
const SEXAGESIMAL_SCALE: i64 = 36_000;

/// What kind of quantity a number represents, which fixes its unit,
/// modulus and sign handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Unsigned angle wrapped into [0, 360) degrees.
    Angle,
    /// Unsigned time angle wrapped into [0, 24) hours.
    Hours,
    /// Signed angle in degrees (declination, latitude, altitude).
    Signed,
}

impl Quantity {
    fn modulus(self) -> Option<i64> {
        match self {
            Self::Angle => Some(360),
            Self::Hours => Some(24),
            Self::Signed => None,
        }
    }
}

/// A value split into units (degrees or hours), minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sexagesimal {
    pub negative: bool,
    /// Whole degrees or hours.
    pub units: u32,
    /// Minutes (0..59).
    pub minutes: u8,
    /// Seconds (0.0..60.0), rounded to a tenth.
    pub seconds: f64,
}

impl Sexagesimal {
    /// Split `value`, rounding to the nearest tenth of a second.
    pub fn from_value(value: f64) -> Self {
        let ticks = to_ticks(value, SEXAGESIMAL_SCALE);
        Self::from_ticks(ticks.unsigned_abs(), ticks < 0)
    }

    fn from_ticks(ticks: u64, negative: bool) -> Self {
        let tenths = ticks % 600;
        let minutes = (ticks / 600) % 60;
        let units = ticks / SEXAGESIMAL_SCALE as u64;
        Self {
            negative: negative && ticks != 0,
            units: units as u32,
            minutes: minutes as u8,
            seconds: tenths as f64 / 10.0,
        }
    }

    /// Recombine into a decimal value.
    pub fn to_value(&self) -> f64 {
        let v = self.units as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0;
        if self.negative { -v } else { v }
    }
}

fn to_ticks(value: f64, scale: i64) -> i64 {
    (value * scale as f64).round() as i64
}

/// Round to ticks, wrapping into the quantity's modulus when it has one.
fn quantity_ticks(value: f64, quantity: Quantity, scale: i64) -> i64 {
    let ticks = to_ticks(value, scale);
    match quantity.modulus() {
        Some(m) => ticks.rem_euclid(m * scale),
        None => ticks,
    }
}

/// Render `value` as the given quantity in the given notation.
///
/// Non-finite input renders as `---`.
pub fn format_quantity(value: f64, quantity: Quantity, notation: NumericNotation) -> String {
    if !value.is_finite() {
        return "---".to_string();
    }
    match notation {
        NumericNotation::Decimal => {
            let ticks = quantity_ticks(value, quantity, DECIMAL_SCALE);
            let v = ticks as f64 / DECIMAL_SCALE as f64;
            match quantity {
                Quantity::Angle => format!("{v:.4}°"),
                Quantity::Hours => format!("{v:.4}h"),
                Quantity::Signed => {
                    let sign = if ticks < 0 { '-' } else { '+' };
                    format!("{sign}{:.4}°", v.abs())
                }
            }
        }
        NumericNotation::Sexagesimal => {
            let ticks = quantity_ticks(value, quantity, SEXAGESIMAL_SCALE);
            let s = Sexagesimal::from_ticks(ticks.unsigned_abs(), ticks < 0);
            match quantity {
                Quantity::Angle => format!("{}°{:02}'{:04.1}\"", s.units, s.minutes, s.seconds),
                Quantity::Hours => format!("{:02}h{:02}m{:04.1}s", s.units, s.minutes, s.seconds),
                Quantity::Signed => {
                    let sign = if s.negative { '-' } else { '+' };
                    format!("{sign}{}°{:02}'{:04.1}\"", s.units, s.minutes, s.seconds)
                }
            }
        }
    }
}

/// Round a longitude to the display resolution of `notation`.
///
/// Used before splitting into a zodiac sign so that the in-sign value and
/// the sign agree once rounded.
pub(crate) fn round_longitude(lon_deg: f64, notation: NumericNotation) -> f64 {
    let scale = match notation {
        NumericNotation::Decimal => DECIMAL_SCALE,
        NumericNotation::Sexagesimal => SEXAGESIMAL_SCALE,
    };
    quantity_ticks(lon_deg, Quantity::Angle, scale) as f64 / scale as f64
}

/// Parse a sexagesimal or decimal number.
///
/// Accepts `12.5`, `-12.5`, `12°30'00"`, `-12:30:00`, `12h30m0s`,
/// `12 30 0` and partial forms such as `12°30'`.
pub fn parse_sexagesimal(s: &str) -> Result<f64, FormatError> {
    let invalid = || FormatError::InvalidSexagesimal(s.to_string());
    let trimmed = s.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let is_separator =
        |c: char| matches!(c, '°' | '\'' | '"' | ':' | 'd' | 'h' | 'm' | 's') || c.is_whitespace();
    let parts: Vec<&str> = body.split(is_separator).filter(|p| !p.is_empty()).collect();
    if parts.is_empty() || parts.len() > 3 {
        return Err(invalid());
    }

    let mut fields = [0.0_f64; 3];
    for (slot, part) in fields.iter_mut().zip(&parts) {
        *slot = part.parse().map_err(|_| invalid())?;
        if *slot < 0.0 || !slot.is_finite() {
            return Err(invalid());
        }
    }
    let [units, minutes, seconds] = fields;
    if parts.len() > 1 && (minutes >= 60.0 || seconds >= 60.0) {
        return Err(invalid());
    }

    let value = units + minutes / 60.0 + seconds / 3600.0;
    Ok(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use NumericNotation::{Decimal, Sexagesimal as Sex};

    #[test]
    fn split_known() {
        // 23.853° = 23° 51' 10.8"
        let d = Sexagesimal::from_value(23.853);
        assert_eq!(d.units, 23);
        assert_eq!(d.minutes, 51);
        assert!((d.seconds - 10.8).abs() < 1e-9);
        assert!(!d.negative);
    }

    #[test]
    fn split_negative() {
        let d = Sexagesimal::from_value(-0.5);
        assert!(d.negative);
        assert_eq!((d.units, d.minutes), (0, 30));
        assert!((d.to_value() + 0.5).abs() < 1e-12);
    }

    #[test]
    fn carry_never_shows_sixty_seconds() {
        // 10° 59' 59.97" rounds up to 11° 00' 00.0"
        let v = 10.0 + 59.0 / 60.0 + 59.97 / 3600.0;
        let d = Sexagesimal::from_value(v);
        assert_eq!((d.units, d.minutes), (11, 0));
        assert_eq!(d.seconds, 0.0);
    }

    #[test]
    fn decimal_formats() {
        assert_eq!(format_quantity(123.456_78, Quantity::Angle, Decimal), "123.4568°");
        assert_eq!(format_quantity(8.5, Quantity::Hours, Decimal), "8.5000h");
        assert_eq!(format_quantity(23.4393, Quantity::Signed, Decimal), "+23.4393°");
        assert_eq!(format_quantity(-1.25, Quantity::Signed, Decimal), "-1.2500°");
    }

    #[test]
    fn decimal_wraps_after_rounding() {
        assert_eq!(format_quantity(359.999_99, Quantity::Angle, Decimal), "0.0000°");
        assert_eq!(format_quantity(23.999_999, Quantity::Hours, Decimal), "0.0000h");
        assert_eq!(format_quantity(-30.0, Quantity::Angle, Decimal), "330.0000°");
    }

    #[test]
    fn negative_zero_is_positive() {
        assert_eq!(format_quantity(-0.000_001, Quantity::Signed, Decimal), "+0.0000°");
        assert_eq!(format_quantity(-0.000_001, Quantity::Signed, Sex), "+0°00'00.0\"");
    }

    #[test]
    fn sexagesimal_formats() {
        assert_eq!(format_quantity(23.853, Quantity::Angle, Sex), "23°51'10.8\"");
        assert_eq!(format_quantity(8.5, Quantity::Hours, Sex), "08h30m00.0s");
        assert_eq!(format_quantity(-6.719_892, Quantity::Signed, Sex), "-6°43'11.6\"");
        assert_eq!(format_quantity(359.999_999_9, Quantity::Angle, Sex), "0°00'00.0\"");
    }

    #[test]
    fn non_finite_renders_placeholder() {
        assert_eq!(format_quantity(f64::NAN, Quantity::Angle, Decimal), "---");
    }

    #[test]
    fn parse_forms() {
        assert_eq!(parse_sexagesimal("12.5"), Ok(12.5));
        assert_eq!(parse_sexagesimal("-12:30:00"), Ok(-12.5));
        assert_eq!(parse_sexagesimal("12°30'"), Ok(12.5));
        assert_eq!(parse_sexagesimal("08h30m00.0s"), Ok(8.5));
        assert_eq!(parse_sexagesimal("+1 30"), Ok(1.5));
    }

    #[test]
    fn parse_rejects() {
        assert!(parse_sexagesimal("").is_err());
        assert!(parse_sexagesimal("abc").is_err());
        assert!(parse_sexagesimal("1:2:3:4").is_err());
        assert!(parse_sexagesimal("10°75'").is_err());
        assert!(parse_sexagesimal("10°-5'").is_err());
    }
}
