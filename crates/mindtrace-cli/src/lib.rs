//! mindtrace-cli library root.
//!
//! Exposes the command layer so integration tests can drive it without
//! spawning the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod fsutil;
pub mod logging;
