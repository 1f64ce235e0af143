use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("invalid response set for '{instrument}': {reason}")]
    InvalidResponseSet { instrument: String, reason: String },
}

impl InstrumentError {
    pub(crate) fn invalid(instrument: &str, reason: impl Into<String>) -> Self {
        Self::InvalidResponseSet {
            instrument: instrument.to_string(),
            reason: reason.into(),
        }
    }
}
