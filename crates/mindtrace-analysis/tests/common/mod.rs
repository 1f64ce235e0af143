#![allow(dead_code)]

use std::collections::BTreeSet;
use std::io;
use std::sync::{Arc, Mutex};

use jiff::{SignedDuration, Timestamp};
use mindtrace_core::models::mood_log::MoodLogEntry;
use tracing_subscriber::fmt::MakeWriter;
use uuid::Uuid;

pub fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

pub fn now() -> Timestamp {
    ts("2026-03-31T12:00:00Z")
}

pub fn days_before(at: Timestamp, days: i64) -> Timestamp {
    at.checked_sub(SignedDuration::from_hours(days * 24)).unwrap()
}

/// `(mood, sleep, stress, energy)` recorded at `at`.
pub fn entry(patient_id: Uuid, at: Timestamp, metrics: (i16, i16, i16, i16)) -> MoodLogEntry {
    let (mood, sleep, stress, energy) = metrics;
    MoodLogEntry {
        patient_id,
        mood_level: mood,
        sleep_hours: sleep,
        stress_level: stress,
        energy_level: energy,
        self_care_tags: BTreeSet::new(),
        notes: String::new(),
        timestamp: at,
    }
}

/// Log lines written while the returned guard is alive on this thread.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

pub struct CapturedWriter(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CapturedWriter(self.0.clone())
    }
}

pub fn capture_logs() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    (logs, tracing::subscriber::set_default(subscriber))
}
