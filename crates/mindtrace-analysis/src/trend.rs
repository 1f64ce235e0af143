use mindtrace_core::models::monitoring::{TrendPoint, TrendSeries};
use mindtrace_core::models::mood_log::MoodLogEntry;

/// One point per entry for each charted metric, in the order given.
pub fn build_series(entries: &[MoodLogEntry]) -> TrendSeries {
    let point = |e: &MoodLogEntry, value: i16| TrendPoint {
        timestamp: e.timestamp,
        value,
        mood_level: e.mood_level,
    };

    TrendSeries {
        sleep: entries.iter().map(|e| point(e, e.sleep_hours)).collect(),
        energy: entries.iter().map(|e| point(e, e.energy_level)).collect(),
        stress: entries.iter().map(|e| point(e, e.stress_level)).collect(),
    }
}
