// In memory implementation of the ClockStore port.
//
// Responsibilities
// - Keep clocks and their event logs per clock id.
// - Enforce optimistic concurrency by checking the expected version before appending.
// - Replay appended events through the aggregate so the log never holds an illegal transition.

use crate::modules::clocks::core::clock::Clock;
use crate::modules::clocks::core::events::ClockEvent;
use crate::shared::infrastructure::clock_store::{ClockStore, ClockStoreError, LoadedClock};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryClockStore {
    inner: RwLock<HashMap<String, Clock>>,
    offline: bool,
    delay_append_ms: AtomicU64,
}

impl InMemoryClockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    /// Holds every append for `ms` before taking the write lock.
    pub fn set_delay_append_ms(&self, ms: u64) {
        self.delay_append_ms.store(ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), ClockStoreError> {
        if self.offline {
            return Err(ClockStoreError::Backend("Clock store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ClockStore for InMemoryClockStore {
    async fn create(&self, clock: Clock) -> Result<(), ClockStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        if guard.contains_key(&clock.id) {
            return Err(ClockStoreError::AlreadyExists(clock.id));
        }
        guard.insert(clock.id.clone(), clock);
        Ok(())
    }

    async fn load(&self, clock_id: &str) -> Result<LoadedClock, ClockStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        let clock = guard
            .get(clock_id)
            .cloned()
            .ok_or_else(|| ClockStoreError::NotFound(clock_id.to_string()))?;
        let version = clock.events().len() as i64;
        Ok(LoadedClock { clock, version })
    }

    async fn append(
        &self,
        clock_id: &str,
        expected_version: i64,
        new_events: &[ClockEvent],
    ) -> Result<(), ClockStoreError> {
        self.ensure_online()?;
        let delay = self.delay_append_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        let mut guard = self.inner.write().await;
        let clock = guard
            .get_mut(clock_id)
            .ok_or_else(|| ClockStoreError::NotFound(clock_id.to_string()))?;
        let actual = clock.events().len() as i64;
        if actual != expected_version {
            return Err(ClockStoreError::VersionMismatch {
                expected: expected_version,
                actual,
            });
        }
        let mut next = clock.clone();
        for event in new_events {
            next.append(event.clone())?;
        }
        *clock = next;
        Ok(())
    }
}
