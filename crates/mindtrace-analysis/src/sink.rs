use mindtrace_core::models::alert::MonitoringAlert;
use tracing::warn;

use crate::collaborators::{AlertSink, BoxFuture};
use crate::error::CollaboratorError;

/// Records each alert as a structured `tracing` event.
///
/// Useful on its own in development and as the log trail behind a real
/// delivery sink. It never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAlertSink;

impl AlertSink for TracingAlertSink {
    fn emit(&self, alert: MonitoringAlert) -> BoxFuture<'_, Result<(), CollaboratorError>> {
        Box::pin(async move {
            warn!(
                alert.id = %alert.id,
                alert.patient_id = %alert.patient_id,
                alert.status = %alert.status,
                alert.urgency = ?alert.urgency,
                avg.mood = alert.averages.mood,
                avg.stress = alert.averages.stress,
                avg.sleep = alert.averages.sleep,
                avg.energy = alert.averages.energy,
                generated_at = %alert.generated_at,
                "{}",
                alert.title
            );
            Ok(())
        })
    }
}
