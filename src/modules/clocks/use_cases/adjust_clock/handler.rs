use crate::modules::clocks::core::events::ClockEvent;
use crate::modules::clocks::use_cases::adjust_clock::command::AdjustClock;
use crate::modules::clocks::use_cases::adjust_clock::decide::decide_adjust;
use crate::modules::clocks::use_cases::append_flow::decide_and_append;
use crate::modules::clocks::use_cases::errors::ApplicationError;
use crate::shared::core::time_source::TimeSource;
use crate::shared::infrastructure::clock_store::ClockStore;
use std::sync::Arc;
use tracing::{info, instrument};

pub struct AdjustClockHandler<TStore, TTime>
where
    TStore: ClockStore + Send + Sync + 'static,
    TTime: TimeSource + 'static,
{
    store: Arc<TStore>,
    time_source: Arc<TTime>,
}

impl<TStore, TTime> AdjustClockHandler<TStore, TTime>
where
    TStore: ClockStore + Send + Sync + 'static,
    TTime: TimeSource + 'static,
{
    pub fn new(store: Arc<TStore>, time_source: Arc<TTime>) -> Self {
        Self { store, time_source }
    }

    #[instrument(skip(self))]
    pub async fn handle(&self, command: AdjustClock) -> Result<Vec<ClockEvent>, ApplicationError> {
        let now = self.time_source.now();
        let adjustment = command.adjustment;
        let events = decide_and_append(&*self.store, &command.clock_id, |clock| {
            decide_adjust(clock, adjustment, now)
        })
        .await?;
        info!(clock_id = %command.clock_id, ?adjustment, "clock adjusted");
        Ok(events)
    }
}
