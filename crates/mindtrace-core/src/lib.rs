//! mindtrace-core
//!
//! Pure domain types for the MindTrace clinical engine: questionnaire
//! responses, mood-log entries, monitoring status and the DTOs produced by
//! trend analysis. No I/O; this is the shared vocabulary of the workspace.

pub mod error;
pub mod models;
