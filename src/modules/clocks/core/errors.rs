use chrono::{DateTime, TimeDelta, Utc};

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("clock is not active")]
    ClockIsNotActive,

    #[error("clock is already active")]
    ClockIsAlreadyActive,

    #[error("clock has no recorded events")]
    EmptyEventLog,

    #[error("clock has never been started or stopped")]
    NoStateChangeRecorded,

    #[error("no event at position {position}, log holds {len}")]
    EventNotFound { position: usize, len: usize },

    #[error("event at {timestamp} is older than the latest event at {latest}")]
    OutOfOrder {
        timestamp: DateTime<Utc>,
        latest: DateTime<Utc>,
    },

    #[error("adjustment amount must not be negative, got {0}")]
    NegativeAdjustment(TimeDelta),

    #[error("snapshot {actual} does not match the expected {expected}")]
    SnapshotMismatch { expected: TimeDelta, actual: TimeDelta },

    #[error("time arithmetic overflowed")]
    TimeOverflow,

    #[error("invalid clock settings: {0}")]
    InvalidSettings(String),
}
