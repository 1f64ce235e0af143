use thiserror::Error;

use mindtrace_instruments::error::InstrumentError;

/// Failure reported by the Response Store or the Alert Sink.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CollaboratorError {
    #[error("response store error: {0}")]
    Store(String),

    #[error("alert sink error: {0}")]
    Sink(String),
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid analysis window: {days} days (expected 1..={max})")]
    InvalidWindow { days: i64, max: i64 },

    #[error(transparent)]
    Instrument(#[from] InstrumentError),

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),

    #[error("time arithmetic error: {0}")]
    Time(#[from] jiff::Error),
}

impl AnalysisError {
    /// Whether the caller may retry the same request unchanged.
    ///
    /// Only collaborator failures are transient; every other variant
    /// describes a problem with the request itself.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Collaborator(_))
    }
}
