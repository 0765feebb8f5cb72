//! Rendering of body positions.
//!
//! A [`CoordinateMode`] selects which frame chain runs (ecliptic,
//! zodiacal, equatorial or horizontal) and whether the longitude-like
//! component is shown in degrees or hours. A [`NumericNotation`] selects
//! decimal or sexagesimal output. [`evaluate`] performs the dispatch and
//! returns typed values; [`render`] turns them into display strings.

pub mod error;
pub mod mode;
pub mod motion;
pub mod render;
pub mod sexagesimal;
pub mod zodiac;

pub use error::FormatError;
pub use mode::{CoordinateMode, NumericNotation};
pub use motion::Motion;
pub use render::{FrameContext, ModeValue, evaluate, render};
pub use sexagesimal::{Quantity, Sexagesimal, format_quantity, parse_sexagesimal};
pub use zodiac::{ALL_SIGNS, SignPosition, ZodiacSign, sign_from_longitude};
