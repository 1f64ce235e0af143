use std::sync::Arc;

use jiff::{SignedDuration, Timestamp};
use mindtrace_core::models::alert::MonitoringAlert;
use mindtrace_core::models::monitoring::{
    AnalysisResult, Averages, LatestSummary, MonitoringStatus,
};
use mindtrace_instruments::InstrumentCode;
use mindtrace_instruments::scoring::ScoringResult;
use serde::Serialize;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::collaborators::{AlertSink, ResponseStore};
use crate::config::{MAX_WINDOW_DAYS, MonitorConfig};
use crate::error::AnalysisError;
use crate::status::compute_status;
use crate::trend::build_series;

/// What a single monitoring check found.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MonitoringOutcome {
    /// The patient has no entries; nothing was evaluated.
    NoEntries,
    Evaluated {
        status: MonitoringStatus,
        averages: Averages,
        entry_count: usize,
        /// The alert handed to the sink, if the status warranted one.
        alert: Option<MonitoringAlert>,
    },
}

impl MonitoringOutcome {
    pub fn status(&self) -> Option<MonitoringStatus> {
        match self {
            Self::NoEntries => None,
            Self::Evaluated { status, .. } => Some(*status),
        }
    }
}

/// Orchestrates the trend engine and the scoring engine over the Response
/// Store, escalating to the Alert Sink.
///
/// Holds no per-patient state: every call recomputes from what the store
/// returns.
pub struct MonitoringEngine {
    store: Arc<dyn ResponseStore>,
    sink: Arc<dyn AlertSink>,
    config: MonitorConfig,
}

impl MonitoringEngine {
    pub fn new(store: Arc<dyn ResponseStore>, sink: Arc<dyn AlertSink>) -> Self {
        Self {
            store,
            sink,
            config: MonitorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: MonitorConfig) -> Self {
        self.config = config;
        self
    }

    /// Trend analysis over the last `window_days` days, ending now.
    pub async fn run_historical_analysis(
        &self,
        patient_id: Uuid,
        window_days: i64,
    ) -> Result<AnalysisResult, AnalysisError> {
        self.run_historical_analysis_at(patient_id, window_days, Timestamp::now())
            .await
    }

    /// Trend analysis over `[now - window_days, now]`.
    pub async fn run_historical_analysis_at(
        &self,
        patient_id: Uuid,
        window_days: i64,
        now: Timestamp,
    ) -> Result<AnalysisResult, AnalysisError> {
        validate_window(window_days)?;
        let start = now.checked_sub(SignedDuration::from_hours(window_days * 24))?;

        let entries = self
            .store
            .fetch_entries_in_window(patient_id, start, now)
            .await
            .inspect_err(|e| error!(%patient_id, error = %e, "failed to fetch entries"))?;

        let averages = Averages::from_entries(&entries);
        let status = if entries.is_empty() {
            MonitoringStatus::default()
        } else {
            compute_status(averages.sleep, averages.mood, averages.stress, averages.energy)
        };

        debug!(
            %patient_id,
            window_days,
            entries = entries.len(),
            %status,
            "historical analysis complete"
        );

        Ok(AnalysisResult {
            series: build_series(&entries),
            averages,
            status,
            entry_count: entries.len(),
        })
    }

    /// Re-derive the patient's status from their most recent entries and
    /// escalate when it is the most severe level.
    ///
    /// Safe to call after every new entry or on a schedule; repeated calls
    /// over unchanged data emit the same alert again.
    pub async fn run_monitoring_check(
        &self,
        patient_id: Uuid,
    ) -> Result<MonitoringOutcome, AnalysisError> {
        self.run_monitoring_check_at(patient_id, Timestamp::now())
            .await
    }

    /// As [`Self::run_monitoring_check`], stamping any alert with `now`.
    pub async fn run_monitoring_check_at(
        &self,
        patient_id: Uuid,
        now: Timestamp,
    ) -> Result<MonitoringOutcome, AnalysisError> {
        let window = self.config.monitoring_window.max(1);
        let entries = self
            .store
            .fetch_last_n(patient_id, window)
            .await
            .inspect_err(|e| error!(%patient_id, error = %e, "failed to fetch recent entries"))?;

        if entries.is_empty() {
            debug!(%patient_id, "no entries, skipping monitoring check");
            return Ok(MonitoringOutcome::NoEntries);
        }

        let averages = Averages::from_entries(&entries);
        let status = compute_status(averages.sleep, averages.mood, averages.stress, averages.energy);

        info!(
            %patient_id,
            entries = entries.len(),
            avg.mood = averages.mood,
            avg.stress = averages.stress,
            avg.sleep = averages.sleep,
            avg.energy = averages.energy,
            %status,
            "monitoring check complete"
        );

        let alert = if status.is_most_severe() {
            let alert = MonitoringAlert::new(patient_id, status, averages, now);
            self.sink
                .emit(alert.clone())
                .await
                .inspect_err(|e| error!(%patient_id, error = %e, "failed to emit alert"))?;
            warn!(%patient_id, alert_id = %alert.id, "monitoring alert emitted");
            Some(alert)
        } else {
            None
        };

        Ok(MonitoringOutcome::Evaluated {
            status,
            averages,
            entry_count: entries.len(),
            alert,
        })
    }

    /// Fetch one administration's responses and score them.
    ///
    /// The instrument code is resolved before the store is contacted.
    pub async fn score_administration(
        &self,
        instrument_code: &str,
        administration_id: Uuid,
    ) -> Result<ScoringResult, AnalysisError> {
        let code: InstrumentCode = instrument_code.parse()?;
        let responses = self
            .store
            .fetch_responses(administration_id)
            .await
            .inspect_err(|e| {
                error!(%administration_id, error = %e, "failed to fetch responses")
            })?;

        let result = code.instrument().score(&responses)?;
        debug!(
            %administration_id,
            instrument = %code,
            total_score = result.total_score,
            classification = %result.classification,
            "administration scored"
        );
        Ok(result)
    }

    /// The patient's most recent entry, or an empty summary.
    pub async fn latest_summary(&self, patient_id: Uuid) -> Result<LatestSummary, AnalysisError> {
        let entries = self
            .store
            .fetch_last_n(patient_id, 1)
            .await
            .inspect_err(|e| error!(%patient_id, error = %e, "failed to fetch latest entry"))?;
        Ok(entries.first().map(LatestSummary::from).unwrap_or_default())
    }
}

/// Reject analysis windows outside `1..=MAX_WINDOW_DAYS`.
pub fn validate_window(window_days: i64) -> Result<(), AnalysisError> {
    if window_days <= 0 || window_days > MAX_WINDOW_DAYS {
        return Err(AnalysisError::InvalidWindow {
            days: window_days,
            max: MAX_WINDOW_DAYS,
        });
    }
    Ok(())
}
