use mindtrace_core::models::monitoring::MonitoringStatus;

/// Cut-offs for one severity level. A value strictly beyond any limit
/// triggers the level.
struct Thresholds {
    mood_below: f64,
    stress_above: f64,
    sleep_below: f64,
    sleep_above: f64,
    energy_below: f64,
}

const PREOCUPANTE: Thresholds = Thresholds {
    mood_below: 2.5,
    stress_above: 8.0,
    sleep_below: 4.0,
    sleep_above: 11.0,
    energy_below: 2.5,
};

const ATENCAO: Thresholds = Thresholds {
    mood_below: 3.5,
    stress_above: 6.0,
    sleep_below: 5.0,
    sleep_above: 10.0,
    energy_below: 4.0,
};

impl Thresholds {
    fn triggered(&self, sleep: f64, mood: f64, stress: f64, energy: f64) -> bool {
        mood < self.mood_below
            || stress > self.stress_above
            || sleep < self.sleep_below
            || sleep > self.sleep_above
            || energy < self.energy_below
    }
}

/// Classify averaged metrics, most severe level first.
pub fn compute_status(sleep: f64, mood: f64, stress: f64, energy: f64) -> MonitoringStatus {
    if PREOCUPANTE.triggered(sleep, mood, stress, energy) {
        MonitoringStatus::Preocupante
    } else if ATENCAO.triggered(sleep, mood, stress, energy) {
        MonitoringStatus::Atencao
    } else {
        MonitoringStatus::Regular
    }
}
