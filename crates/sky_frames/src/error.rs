//! Error type for frame-model selection.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FrameError {
    /// Obliquity model name other than iau1980 or iau2006.
    #[error("unknown obliquity model '{0}' (expected iau1980 or iau2006)")]
    UnknownObliquityModel(String),
}
