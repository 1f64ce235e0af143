use serde::{Deserialize, Serialize};

/// Longest calendar window a historical analysis may cover.
pub const MAX_WINDOW_DAYS: i64 = 90;

pub const DEFAULT_MONITORING_WINDOW: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// How many of the most recent entries the monitoring trigger averages.
    #[serde(default = "default_monitoring_window")]
    pub monitoring_window: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            monitoring_window: DEFAULT_MONITORING_WINDOW,
        }
    }
}

fn default_monitoring_window() -> usize {
    DEFAULT_MONITORING_WINDOW
}
