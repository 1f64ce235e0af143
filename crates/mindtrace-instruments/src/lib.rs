//! mindtrace-instruments
//!
//! Standardized questionnaire definitions and their scoring rules. Pure
//! computation, no I/O. Each supported instrument is bound at compile time
//! to one [`strategy::ScoringStrategy`].

pub mod error;
pub mod instruments;
pub mod scoring;
pub mod strategy;

use std::fmt;
use std::str::FromStr;

use mindtrace_core::models::response::RawResponse;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use error::InstrumentError;
use scoring::{ScoreRange, ScoringResult, ValidationError};
use strategy::ScoringStrategy;

/// The closed set of supported instrument codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InstrumentCode {
    #[serde(rename = "phq_9")]
    Phq9,
    #[serde(rename = "gad_7")]
    Gad7,
    #[serde(rename = "who_5")]
    Who5,
    WhoqolBref,
}

impl InstrumentCode {
    pub const ALL: [InstrumentCode; 4] = [Self::Phq9, Self::Gad7, Self::Who5, Self::WhoqolBref];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phq9 => "phq_9",
            Self::Gad7 => "gad_7",
            Self::Who5 => "who_5",
            Self::WhoqolBref => "whoqol_bref",
        }
    }

    pub fn instrument(&self) -> Box<dyn Instrument> {
        match self {
            Self::Phq9 => Box::new(instruments::phq9::Phq9),
            Self::Gad7 => Box::new(instruments::gad7::Gad7),
            Self::Who5 => Box::new(instruments::who5::Who5),
            Self::WhoqolBref => Box::new(instruments::whoqol_bref::WhoqolBref),
        }
    }
}

impl FromStr for InstrumentCode {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| InstrumentError::UnknownInstrument(s.to_string()))
    }
}

impl fmt::Display for InstrumentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait implemented by each standardized questionnaire.
pub trait Instrument: Send + Sync {
    fn code(&self) -> InstrumentCode;

    /// Human-readable name (e.g., "PHQ-9", "WHOQOL-BREF").
    fn name(&self) -> &str;

    /// Number of items in a complete administration.
    fn item_count(&self) -> usize;

    /// The answer scale every item uses.
    fn item_range(&self) -> ScoreRange;

    fn strategy(&self) -> ScoringStrategy;

    /// Score a response set. Item values are trusted to be on the scale;
    /// see [`Instrument::validate_responses`] for the upstream check.
    fn score(&self, responses: &[RawResponse]) -> Result<ScoringResult, InstrumentError> {
        self.strategy().apply(self.code().as_str(), responses)
    }

    /// Report every response whose value falls outside the item scale.
    fn validate_responses(&self, responses: &[RawResponse]) -> Vec<ValidationError> {
        let range = self.item_range();
        responses
            .iter()
            .filter(|r| !range.contains(r.value))
            .map(|r| ValidationError {
                item_index: r.item_index,
                value: r.value,
                expected_range: range,
                message: format!(
                    "{}: item {} value {} is outside range [{}, {}]",
                    self.name(),
                    r.item_index,
                    r.value,
                    range.min,
                    range.max,
                ),
            })
            .collect()
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    InstrumentCode::ALL.iter().map(|c| c.instrument()).collect()
}

/// Look up an instrument by code.
pub fn get_instrument(code: &str) -> Option<Box<dyn Instrument>> {
    code.parse::<InstrumentCode>().ok().map(|c| c.instrument())
}

/// Score `responses` with the instrument registered under `code`.
pub fn score(code: &str, responses: &[RawResponse]) -> Result<ScoringResult, InstrumentError> {
    code.parse::<InstrumentCode>()?.instrument().score(responses)
}
