//! Error types for mode selection and sexagesimal parsing.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FormatError {
    /// Coordinate mode index outside 1..=6.
    #[error("unknown coordinate mode {0} (expected 1-6)")]
    UnknownMode(u8),
    /// Coordinate mode given by an unrecognised name.
    #[error("unknown coordinate mode '{0}'")]
    UnknownModeName(String),
    /// Notation other than decimal or sexagesimal.
    #[error("unknown notation '{0}' (expected decimal or sexagesimal)")]
    UnknownNotation(String),
    /// Text that is not a sexagesimal or decimal number.
    #[error("invalid sexagesimal value '{0}'")]
    InvalidSexagesimal(String),
}
