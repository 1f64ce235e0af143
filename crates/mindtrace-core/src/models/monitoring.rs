use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::mood_log::MoodLogEntry;

/// Three-level risk status derived from mood-log averages.
///
/// Variants are declared in ascending severity so that `Ord` follows
/// clinical severity.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum MonitoringStatus {
    #[default]
    Regular,
    Atencao,
    Preocupante,
}

impl MonitoringStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regular => "REGULAR",
            Self::Atencao => "ATENCAO",
            Self::Preocupante => "PREOCUPANTE",
        }
    }

    pub fn is_most_severe(&self) -> bool {
        matches!(self, Self::Preocupante)
    }
}

impl fmt::Display for MonitoringStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-metric arithmetic means over a set of mood-log entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Averages {
    pub sleep: f64,
    pub mood: f64,
    pub stress: f64,
    pub energy: f64,
}

impl Averages {
    /// Means of each metric; all zero when `entries` is empty.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a MoodLogEntry>,
    {
        let mut count = 0u32;
        let (mut sleep, mut mood, mut stress, mut energy) = (0i64, 0i64, 0i64, 0i64);
        for entry in entries {
            count += 1;
            sleep += i64::from(entry.sleep_hours);
            mood += i64::from(entry.mood_level);
            stress += i64::from(entry.stress_level);
            energy += i64::from(entry.energy_level);
        }

        if count == 0 {
            return Self::default();
        }

        let n = f64::from(count);
        Self {
            sleep: sleep as f64 / n,
            mood: mood as f64 / n,
            stress: stress as f64 / n,
            energy: energy as f64 / n,
        }
    }
}

/// One chart point: the metric's value plus the mood reported alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendPoint {
    pub timestamp: jiff::Timestamp,
    pub value: i16,
    pub mood_level: i16,
}

/// Chart series for the three tracked metrics, in entry order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendSeries {
    pub sleep: Vec<TrendPoint>,
    pub energy: Vec<TrendPoint>,
    pub stress: Vec<TrendPoint>,
}

impl TrendSeries {
    pub fn len(&self) -> usize {
        self.sleep.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sleep.is_empty()
    }
}

/// Output of a historical analysis over a calendar window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisResult {
    pub series: TrendSeries,
    pub averages: Averages,
    pub status: MonitoringStatus,
    pub entry_count: usize,
}

/// The patient's most recent self-report, reduced to what a dashboard card
/// shows. Every field is `None` when the patient has no entries yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LatestSummary {
    pub timestamp: Option<jiff::Timestamp>,
    pub mood_level: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&MoodLogEntry> for LatestSummary {
    fn from(entry: &MoodLogEntry) -> Self {
        Self {
            timestamp: Some(entry.timestamp),
            mood_level: Some(entry.mood_level),
            notes: (!entry.notes.is_empty()).then(|| entry.notes.clone()),
        }
    }
}
