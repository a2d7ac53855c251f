use crate::modules::clocks::use_cases::create_clock::command::{ClockDefaults, CreateClock};
use crate::modules::clocks::use_cases::create_clock::decide::decide_create;
use crate::modules::clocks::use_cases::errors::ApplicationError;
use crate::shared::infrastructure::clock_store::ClockStore;
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

pub struct CreateClockHandler<TStore>
where
    TStore: ClockStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
    defaults: ClockDefaults,
}

impl<TStore> CreateClockHandler<TStore>
where
    TStore: ClockStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, defaults: ClockDefaults) -> Self {
        Self { store, defaults }
    }

    /// Creates a stopped clock with an empty log and returns its id.
    #[instrument(skip(self))]
    pub async fn handle(&self, command: CreateClock) -> Result<String, ApplicationError> {
        let clock_id = Uuid::now_v7().to_string();
        let clock = decide_create(clock_id.clone(), command, &self.defaults)?;
        self.store.create(clock).await?;
        info!(%clock_id, "clock created");
        Ok(clock_id)
    }
}
