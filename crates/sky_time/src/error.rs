//! Error types for civil-time handling.

use thiserror::Error;

/// Errors from building or parsing a civil instant.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The text did not match `YYYY-MM-DD[Thh:mm:ss[.fff]][Z]`.
    #[error("invalid UTC string '{input}': {reason}")]
    Parse { input: String, reason: String },
    /// A calendar field is outside its range.
    #[error("{field} out of range: {value}")]
    FieldOutOfRange { field: &'static str, value: f64 },
}
