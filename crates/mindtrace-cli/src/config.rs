use std::path::{Path, PathBuf};

use mindtrace_analysis::config::MonitorConfig;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// JSON dataset the file-backed Response Store reads and writes.
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    #[serde(default)]
    pub log_format: LogFormat,
    #[serde(default)]
    pub monitor: MonitorConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            data_path: default_data_path(),
            log_format: LogFormat::default(),
            monitor: MonitorConfig::default(),
        }
    }
}

fn default_data_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("mindtrace").join("dataset.json"))
        .unwrap_or_else(|| PathBuf::from("dataset.json"))
}

/// `<config dir>/mindtrace/config.json`.
pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("mindtrace").join("config.json"))
}

/// A config as read from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: CliConfig,
    /// On-disk version the file was migrated from, if it was older than
    /// [`CURRENT_VERSION`]. Loading runs before logging is set up, so the
    /// caller reports this.
    pub migrated_from: Option<u32>,
}

/// Load the config at `path`, or defaults when no file exists there.
pub fn load_config(path: &Path) -> eyre::Result<LoadedConfig> {
    if !path.exists() {
        return Ok(LoadedConfig {
            config: CliConfig::default(),
            migrated_from: None,
        });
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: CliConfig = serde_json::from_value(migrated)?;
    validate(&config)?;
    Ok(LoadedConfig {
        config,
        migrated_from: (on_disk_version < CURRENT_VERSION).then_some(on_disk_version),
    })
}

fn validate(config: &CliConfig) -> eyre::Result<()> {
    if config.monitor.monitoring_window == 0 {
        return Err(eyre::eyre!("monitor.monitoring_window must be at least 1"));
    }
    Ok(())
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update mindtrace."
        ));
    }

    // v0 → v1: top-level `monitoring_window` moved under `monitor`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if let Some(window) = obj.remove("monitoring_window") {
            let monitor = obj
                .entry("monitor")
                .or_insert_with(|| serde_json::json!({}))
                .as_object_mut()
                .ok_or_else(|| eyre::eyre!("config `monitor` is not a JSON object"))?;
            // An already-nested value is newer than the top-level one.
            monitor.entry("monitoring_window").or_insert(window);
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &CliConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    crate::fsutil::write_atomic(path, json.as_bytes())?;
    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
