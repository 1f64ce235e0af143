use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("mood level must be between 1 and 5, got {0}")]
    MoodLevelOutOfRange(i16),

    #[error("sleep hours must be between 0 and 12, got {0}")]
    SleepHoursOutOfRange(i16),

    #[error("stress level must be between 1 and 10, got {0}")]
    StressLevelOutOfRange(i16),

    #[error("energy level must be between 1 and 10, got {0}")]
    EnergyLevelOutOfRange(i16),

    #[error("self-care tag must not be blank")]
    BlankSelfCareTag,

    #[error("entry timestamp {timestamp} is in the future (now: {now})")]
    TimestampInFuture {
        timestamp: jiff::Timestamp,
        now: jiff::Timestamp,
    },
}
