use std::path::Path;
use std::sync::Arc;

use mindtrace_analysis::MonitoringEngine;
use mindtrace_analysis::sink::TracingAlertSink;
use mindtrace_core::models::mood_log::MoodLogEntry;
use mindtrace_core::models::response::RawResponse;
use mindtrace_instruments::all_instruments;
use serde_json::{Value, json};

use crate::cli::Command;
use crate::config::CliConfig;
use crate::dataset::Dataset;

/// Run one command against the dataset at `data_path` and return its JSON
/// output.
pub async fn execute(command: Command, config: &CliConfig, data_path: &Path) -> eyre::Result<Value> {
    match command {
        Command::Init => Err(eyre::eyre!("init is handled before the dataset is opened")),
        Command::Instruments => Ok(list_instruments()),
        Command::ScoreFile { instrument, path } => {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))?;
            let responses: Vec<RawResponse> = serde_json::from_str(&contents)?;
            let result = mindtrace_instruments::score(&instrument, &responses)?;
            Ok(serde_json::to_value(result)?)
        }
        Command::Score { administration } => {
            let dataset = Dataset::load(data_path)?;
            let code = dataset
                .administration(administration)
                .map(|a| a.instrument)
                .ok_or_else(|| eyre::eyre!("administration not found: {administration}"))?;
            let engine = engine_for(&dataset, config);
            let result = engine
                .score_administration(code.as_str(), administration)
                .await?;
            Ok(json!({ "instrument": code, "result": result }))
        }
        Command::Analyze { patient, days } => {
            let dataset = Dataset::load(data_path)?;
            let result = engine_for(&dataset, config)
                .run_historical_analysis(patient, days)
                .await?;
            Ok(serde_json::to_value(result)?)
        }
        Command::Monitor { patient } => {
            let dataset = Dataset::load(data_path)?;
            let outcome = engine_for(&dataset, config)
                .run_monitoring_check(patient)
                .await?;
            Ok(serde_json::to_value(outcome)?)
        }
        Command::Record {
            patient,
            mood,
            sleep,
            stress,
            energy,
            tags,
            notes,
            at,
        } => {
            let now = jiff::Timestamp::now();
            let entry = MoodLogEntry {
                patient_id: patient,
                mood_level: mood,
                sleep_hours: sleep,
                stress_level: stress,
                energy_level: energy,
                self_care_tags: tags.into_iter().collect(),
                notes,
                timestamp: at.unwrap_or(now),
            };
            entry.validate(now)?;

            let mut dataset = Dataset::load(data_path)?;
            dataset.mood_logs.push(entry.clone());
            dataset.save(data_path)?;
            tracing::info!(patient_id = %patient, "mood entry recorded");

            let outcome = engine_for(&dataset, config)
                .run_monitoring_check(patient)
                .await?;
            Ok(json!({ "entry": entry, "monitoring": outcome }))
        }
        Command::Summary { patient } => {
            let dataset = Dataset::load(data_path)?;
            let summary = engine_for(&dataset, config).latest_summary(patient).await?;
            Ok(serde_json::to_value(summary)?)
        }
    }
}

fn engine_for(dataset: &Dataset, config: &CliConfig) -> MonitoringEngine {
    MonitoringEngine::new(Arc::new(dataset.to_store()), Arc::new(TracingAlertSink))
        .with_config(config.monitor.clone())
}

fn list_instruments() -> Value {
    let instruments: Vec<Value> = all_instruments()
        .iter()
        .map(|i| {
            json!({
                "code": i.code(),
                "name": i.name(),
                "item_count": i.item_count(),
                "item_range": i.item_range(),
                "bands": i.strategy().bands(),
            })
        })
        .collect();
    Value::Array(instruments)
}
