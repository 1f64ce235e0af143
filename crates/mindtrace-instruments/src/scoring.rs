use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Defines the valid range for a single item's value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
}

impl ScoreRange {
    pub const fn likert(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: Some(1.0),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        if value < self.min || value > self.max {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// A classification band: `[lower, upper)`, except that the last band of a
/// table also accepts `upper` itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBand {
    pub lower: f64,
    pub upper: f64,
    pub label: &'static str,
}

impl ScoreBand {
    pub const fn new(lower: f64, upper: f64, label: &'static str) -> Self {
        Self {
            lower,
            upper,
            label,
        }
    }
}

/// Find the band containing `score`.
///
/// Bands are checked in order; a score sitting exactly on a boundary belongs
/// to the band that starts there. Returns `None` for scores outside the table
/// (including NaN).
pub fn classify(bands: &[ScoreBand], score: f64) -> Option<&ScoreBand> {
    let last = bands.len().checked_sub(1)?;
    bands.iter().enumerate().find_map(|(i, band)| {
        let below_top = score < band.upper || (i == last && score <= band.upper);
        (score >= band.lower && below_top).then_some(band)
    })
}

/// True when `bands` tile `[min, max]` with no gaps or overlaps.
pub fn partitions(bands: &[ScoreBand], min: f64, max: f64) -> bool {
    let (Some(first), Some(last)) = (bands.first(), bands.last()) else {
        return false;
    };
    first.lower == min
        && last.upper == max
        && bands.windows(2).all(|w| w[0].upper == w[1].lower)
        && bands.iter().all(|b| b.lower < b.upper)
}

/// Safety flags raised by individual items, independent of the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SafetyFlag {
    SuicidalIdeation,
}

impl SafetyFlag {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SuicidalIdeation => "Ideação suicida presente",
        }
    }
}

impl fmt::Display for SafetyFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of scoring one instrument administration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoringResult {
    pub total_score: f64,
    pub classification: String,
    pub alerts: Vec<SafetyFlag>,
    /// Normalized sub-scores keyed by domain name. Empty for instruments
    /// without domains.
    pub domain_scores: BTreeMap<String, f64>,
}

/// An item value outside the instrument's scale.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub item_index: u32,
    pub value: f64,
    pub expected_range: ScoreRange,
    pub message: String,
}
