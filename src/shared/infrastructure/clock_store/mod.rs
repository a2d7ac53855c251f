use async_trait::async_trait;
use thiserror::Error;

use crate::modules::clocks::core::clock::Clock;
use crate::modules::clocks::core::errors::ClockError;
use crate::modules::clocks::core::events::ClockEvent;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClockStoreError {
    #[error("clock {0} not found")]
    NotFound(String),

    #[error("clock {0} already exists")]
    AlreadyExists(String),

    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("event rejected: {0}")]
    Rejected(#[from] ClockError),

    #[error("backend error: {0}")]
    Backend(String),
}

/// A clock as loaded from the store. `version` is the length of its event log.
#[derive(Debug, Clone)]
pub struct LoadedClock {
    pub clock: Clock,
    pub version: i64,
}

#[async_trait]
pub trait ClockStore: Send + Sync {
    async fn create(&self, clock: Clock) -> Result<(), ClockStoreError>;
    async fn load(&self, clock_id: &str) -> Result<LoadedClock, ClockStoreError>;
    async fn append(
        &self,
        clock_id: &str,
        expected_version: i64,
        new_events: &[ClockEvent],
    ) -> Result<(), ClockStoreError>;
}

pub mod in_memory;
