use crate::modules::clocks::use_cases::errors::ApplicationError;
use crate::modules::clocks::use_cases::get_clock_status::query::GetClockStatus;
use crate::modules::clocks::use_cases::get_clock_status::view::{ClockStatus, clock_status};
use crate::shared::core::time_source::TimeSource;
use crate::shared::infrastructure::clock_store::ClockStore;
use std::sync::Arc;
use tracing::instrument;

pub struct GetClockStatusHandler<TStore, TTime>
where
    TStore: ClockStore + Send + Sync + 'static,
    TTime: TimeSource + 'static,
{
    store: Arc<TStore>,
    time_source: Arc<TTime>,
}

impl<TStore, TTime> GetClockStatusHandler<TStore, TTime>
where
    TStore: ClockStore + Send + Sync + 'static,
    TTime: TimeSource + 'static,
{
    pub fn new(store: Arc<TStore>, time_source: Arc<TTime>) -> Self {
        Self { store, time_source }
    }

    #[instrument(skip(self))]
    pub async fn handle(&self, query: GetClockStatus) -> Result<ClockStatus, ApplicationError> {
        let loaded = self.store.load(&query.clock_id).await?;
        Ok(clock_status(&loaded.clock, self.time_source.now())?)
    }
}
