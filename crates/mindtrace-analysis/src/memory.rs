//! In-process collaborators backed by plain collections.

use std::collections::HashMap;

use mindtrace_core::models::alert::MonitoringAlert;
use mindtrace_core::models::mood_log::MoodLogEntry;
use mindtrace_core::models::response::RawResponse;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::collaborators::{AlertSink, BoxFuture, ResponseStore};
use crate::error::CollaboratorError;

#[derive(Debug, Default)]
pub struct MemoryStore {
    administrations: RwLock<HashMap<Uuid, Vec<RawResponse>>>,
    entries: RwLock<Vec<MoodLogEntry>>,
}

impl MemoryStore {
    pub fn new(
        administrations: HashMap<Uuid, Vec<RawResponse>>,
        entries: Vec<MoodLogEntry>,
    ) -> Self {
        Self {
            administrations: RwLock::new(administrations),
            entries: RwLock::new(entries),
        }
    }

    pub async fn insert_administration(&self, id: Uuid, responses: Vec<RawResponse>) {
        self.administrations.write().await.insert(id, responses);
    }

    pub async fn insert_entry(&self, entry: MoodLogEntry) {
        self.entries.write().await.push(entry);
    }
}

impl ResponseStore for MemoryStore {
    fn fetch_responses(
        &self,
        administration_id: Uuid,
    ) -> BoxFuture<'_, Result<Vec<RawResponse>, CollaboratorError>> {
        Box::pin(async move {
            Ok(self
                .administrations
                .read()
                .await
                .get(&administration_id)
                .cloned()
                .unwrap_or_default())
        })
    }

    fn fetch_entries_in_window(
        &self,
        patient_id: Uuid,
        start: jiff::Timestamp,
        end: jiff::Timestamp,
    ) -> BoxFuture<'_, Result<Vec<MoodLogEntry>, CollaboratorError>> {
        Box::pin(async move {
            let mut found: Vec<_> = self
                .entries
                .read()
                .await
                .iter()
                .filter(|e| e.patient_id == patient_id && e.timestamp >= start && e.timestamp <= end)
                .cloned()
                .collect();
            found.sort_by_key(|e| e.timestamp);
            Ok(found)
        })
    }

    fn fetch_last_n(
        &self,
        patient_id: Uuid,
        n: usize,
    ) -> BoxFuture<'_, Result<Vec<MoodLogEntry>, CollaboratorError>> {
        Box::pin(async move {
            let mut found: Vec<_> = self
                .entries
                .read()
                .await
                .iter()
                .filter(|e| e.patient_id == patient_id)
                .cloned()
                .collect();
            found.sort_by_key(|e| std::cmp::Reverse(e.timestamp));
            found.truncate(n);
            Ok(found)
        })
    }
}

/// Keeps every emitted alert for later inspection.
#[derive(Debug, Default)]
pub struct RecordingSink {
    alerts: Mutex<Vec<MonitoringAlert>>,
}

impl RecordingSink {
    pub async fn alerts(&self) -> Vec<MonitoringAlert> {
        self.alerts.lock().await.clone()
    }
}

impl AlertSink for RecordingSink {
    fn emit(&self, alert: MonitoringAlert) -> BoxFuture<'_, Result<(), CollaboratorError>> {
        Box::pin(async move {
            self.alerts.lock().await.push(alert);
            Ok(())
        })
    }
}
