//! JSON dataset file backing the CLI's Response Store.

use std::collections::HashMap;
use std::path::Path;

use mindtrace_analysis::memory::MemoryStore;
use mindtrace_core::models::mood_log::MoodLogEntry;
use mindtrace_core::models::response::RawResponse;
use mindtrace_instruments::InstrumentCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One completed questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Administration {
    pub id: Uuid,
    pub instrument: InstrumentCode,
    pub responses: Vec<RawResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub administrations: Vec<Administration>,
    #[serde(default)]
    pub mood_logs: Vec<MoodLogEntry>,
}

impl Dataset {
    /// Read the dataset at `path`. A missing file is an empty dataset.
    pub fn load(path: &Path) -> eyre::Result<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "no dataset found, starting empty");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read dataset at {}: {e}", path.display()))?;
        let dataset: Self = serde_json::from_str(&contents)
            .map_err(|e| eyre::eyre!("invalid dataset at {}: {e}", path.display()))?;

        tracing::debug!(
            path = %path.display(),
            administrations = dataset.administrations.len(),
            mood_logs = dataset.mood_logs.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    pub fn save(&self, path: &Path) -> eyre::Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        crate::fsutil::write_atomic(path, json.as_bytes())?;
        tracing::info!(path = %path.display(), "dataset saved");
        Ok(())
    }

    pub fn administration(&self, id: Uuid) -> Option<&Administration> {
        self.administrations.iter().find(|a| a.id == id)
    }

    /// Build an in-memory store holding a copy of this dataset.
    pub fn to_store(&self) -> MemoryStore {
        let administrations: HashMap<Uuid, Vec<RawResponse>> = self
            .administrations
            .iter()
            .map(|a| (a.id, a.responses.clone()))
            .collect();
        MemoryStore::new(administrations, self.mood_logs.clone())
    }
}
