use crate::modules::clocks::use_cases::adjust_clock::handler::AdjustClockHandler;
use crate::modules::clocks::use_cases::create_clock::handler::CreateClockHandler;
use crate::modules::clocks::use_cases::get_clock_status::handler::GetClockStatusHandler;
use crate::modules::clocks::use_cases::start_clock::handler::StartClockHandler;
use crate::modules::clocks::use_cases::stop_clock::handler::StopClockHandler;
use crate::shared::core::time_source::{SystemTimeSource, TimeSource};
use crate::shared::infrastructure::clock_store::in_memory::InMemoryClockStore;
use crate::shell::config::ClockConfig;
use std::sync::Arc;
use tracing::info;

/// Every handler wired against one in-memory store and one time source.
pub struct AppState<TTime = SystemTimeSource>
where
    TTime: TimeSource + 'static,
{
    pub store: Arc<InMemoryClockStore>,
    pub create_clock: CreateClockHandler<InMemoryClockStore>,
    pub start_clock: StartClockHandler<InMemoryClockStore, TTime>,
    pub stop_clock: StopClockHandler<InMemoryClockStore, TTime>,
    pub adjust_clock: AdjustClockHandler<InMemoryClockStore, TTime>,
    pub clock_status: GetClockStatusHandler<InMemoryClockStore, TTime>,
}

impl AppState<SystemTimeSource> {
    pub fn from_env() -> anyhow::Result<Self> {
        let config = ClockConfig::from_env()?;
        Ok(Self::new(config, Arc::new(SystemTimeSource::new())))
    }
}

impl<TTime> AppState<TTime>
where
    TTime: TimeSource + 'static,
{
    pub fn new(config: ClockConfig, time_source: Arc<TTime>) -> Self {
        let store = Arc::new(InMemoryClockStore::new());
        store.set_delay_append_ms(config.store_append_delay_ms);
        info!(
            initial_time = %config.defaults.initial_time,
            increment = %config.defaults.increment,
            "clock module ready"
        );
        Self {
            create_clock: CreateClockHandler::new(store.clone(), config.defaults),
            start_clock: StartClockHandler::new(store.clone(), time_source.clone()),
            stop_clock: StopClockHandler::new(store.clone(), time_source.clone()),
            adjust_clock: AdjustClockHandler::new(store.clone(), time_source.clone()),
            clock_status: GetClockStatusHandler::new(store.clone(), time_source),
            store,
        }
    }
}
