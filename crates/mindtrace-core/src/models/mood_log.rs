use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

pub const MOOD_LEVEL_RANGE: (i16, i16) = (1, 5);
pub const SLEEP_HOURS_RANGE: (i16, i16) = (0, 12);
pub const STRESS_LEVEL_RANGE: (i16, i16) = (1, 10);
pub const ENERGY_LEVEL_RANGE: (i16, i16) = (1, 10);

/// A patient's daily self-report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MoodLogEntry {
    pub patient_id: Uuid,
    pub mood_level: i16,
    pub sleep_hours: i16,
    pub stress_level: i16,
    pub energy_level: i16,
    #[serde(default)]
    pub self_care_tags: BTreeSet<String>,
    #[serde(default)]
    pub notes: String,
    pub timestamp: jiff::Timestamp,
}

impl MoodLogEntry {
    /// Check every bounded field and reject entries stamped after `now`.
    ///
    /// Returns the first violation found, in field order.
    pub fn validate(&self, now: jiff::Timestamp) -> Result<(), CoreError> {
        if !within(self.mood_level, MOOD_LEVEL_RANGE) {
            return Err(CoreError::MoodLevelOutOfRange(self.mood_level));
        }
        if !within(self.sleep_hours, SLEEP_HOURS_RANGE) {
            return Err(CoreError::SleepHoursOutOfRange(self.sleep_hours));
        }
        if !within(self.stress_level, STRESS_LEVEL_RANGE) {
            return Err(CoreError::StressLevelOutOfRange(self.stress_level));
        }
        if !within(self.energy_level, ENERGY_LEVEL_RANGE) {
            return Err(CoreError::EnergyLevelOutOfRange(self.energy_level));
        }
        if self.self_care_tags.iter().any(|t| t.trim().is_empty()) {
            return Err(CoreError::BlankSelfCareTag);
        }
        if self.timestamp > now {
            return Err(CoreError::TimestampInFuture {
                timestamp: self.timestamp,
                now,
            });
        }
        Ok(())
    }
}

fn within(value: i16, (min, max): (i16, i16)) -> bool {
    (min..=max).contains(&value)
}
