//! mindtrace-analysis
//!
//! Trend and monitoring engine. Turns mood-log entries into chart series,
//! averages and a three-level risk status, and escalates the most severe
//! status to an [`collaborators::AlertSink`]. Persistence and delivery sit
//! behind the traits in [`collaborators`].

pub mod collaborators;
pub mod config;
pub mod engine;
pub mod error;
pub mod memory;
pub mod sink;
pub mod status;
pub mod trend;

pub use engine::{MonitoringEngine, MonitoringOutcome};
pub use status::compute_status;
pub use trend::build_series;
