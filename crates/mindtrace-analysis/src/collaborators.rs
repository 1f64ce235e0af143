//! Seams to the systems that own persistence and delivery.

use std::future::Future;
use std::pin::Pin;

use mindtrace_core::models::alert::MonitoringAlert;
use mindtrace_core::models::mood_log::MoodLogEntry;
use mindtrace_core::models::response::RawResponse;
use uuid::Uuid;

use crate::error::CollaboratorError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Read access to submitted questionnaire responses and mood logs.
pub trait ResponseStore: Send + Sync {
    /// Raw item responses of one instrument administration. An unknown
    /// administration yields an empty list.
    fn fetch_responses(
        &self,
        administration_id: Uuid,
    ) -> BoxFuture<'_, Result<Vec<RawResponse>, CollaboratorError>>;

    /// Entries with `start <= timestamp <= end`, oldest first.
    fn fetch_entries_in_window(
        &self,
        patient_id: Uuid,
        start: jiff::Timestamp,
        end: jiff::Timestamp,
    ) -> BoxFuture<'_, Result<Vec<MoodLogEntry>, CollaboratorError>>;

    /// The `n` most recent entries, newest first.
    fn fetch_last_n(
        &self,
        patient_id: Uuid,
        n: usize,
    ) -> BoxFuture<'_, Result<Vec<MoodLogEntry>, CollaboratorError>>;
}

/// Accepts alerts for persistence and delivery. De-duplication across
/// repeated checks is the sink's concern.
pub trait AlertSink: Send + Sync {
    fn emit(&self, alert: MonitoringAlert) -> BoxFuture<'_, Result<(), CollaboratorError>>;
}
