use std::path::PathBuf;

use clap::{Parser, Subcommand};
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "mindtrace", version, about = "Clinical scoring and mood-trend monitoring")]
pub struct Cli {
    /// Config file (defaults to the platform config directory).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset file, overriding `data_path` from the config.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write a default config file.
    Init,
    /// List supported instruments with their scales and bands.
    Instruments,
    /// Score a stored questionnaire administration.
    Score {
        #[arg(long)]
        administration: Uuid,
    },
    /// Score a JSON file of raw responses.
    ScoreFile {
        #[arg(long)]
        instrument: String,
        path: PathBuf,
    },
    /// Trend analysis over the last N days.
    Analyze {
        #[arg(long)]
        patient: Uuid,
        #[arg(long, default_value_t = 30)]
        days: i64,
    },
    /// Recompute the patient's risk status and escalate if needed.
    Monitor {
        #[arg(long)]
        patient: Uuid,
    },
    /// Record a mood-log entry, then run the monitoring check.
    Record {
        #[arg(long)]
        patient: Uuid,
        #[arg(long)]
        mood: i16,
        #[arg(long)]
        sleep: i16,
        #[arg(long)]
        stress: i16,
        #[arg(long)]
        energy: i16,
        /// Self-care activity; repeat for several.
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long, default_value = "")]
        notes: String,
        /// Entry time (RFC 3339); defaults to now.
        #[arg(long)]
        at: Option<jiff::Timestamp>,
    },
    /// Show the patient's most recent entry.
    Summary {
        #[arg(long)]
        patient: Uuid,
    },
}
