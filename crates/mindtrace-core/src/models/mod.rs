pub mod alert;
pub mod monitoring;
pub mod mood_log;
pub mod response;
