use crate::modules::clocks::core::events::ClockEvent;
use crate::modules::clocks::use_cases::append_flow::decide_and_append;
use crate::modules::clocks::use_cases::errors::ApplicationError;
use crate::modules::clocks::use_cases::stop_clock::command::StopClock;
use crate::modules::clocks::use_cases::stop_clock::decide::decide_stop;
use crate::shared::core::time_source::TimeSource;
use crate::shared::infrastructure::clock_store::ClockStore;
use std::sync::Arc;
use tracing::{info, instrument};

pub struct StopClockHandler<TStore, TTime>
where
    TStore: ClockStore + Send + Sync + 'static,
    TTime: TimeSource + 'static,
{
    store: Arc<TStore>,
    time_source: Arc<TTime>,
}

impl<TStore, TTime> StopClockHandler<TStore, TTime>
where
    TStore: ClockStore + Send + Sync + 'static,
    TTime: TimeSource + 'static,
{
    pub fn new(store: Arc<TStore>, time_source: Arc<TTime>) -> Self {
        Self { store, time_source }
    }

    #[instrument(skip(self))]
    pub async fn handle(&self, command: StopClock) -> Result<Vec<ClockEvent>, ApplicationError> {
        let now = self.time_source.now();
        let events =
            decide_and_append(&*self.store, &command.clock_id, |clock| decide_stop(clock, now))
                .await?;
        info!(clock_id = %command.clock_id, %now, "clock stopped");
        Ok(events)
    }
}
