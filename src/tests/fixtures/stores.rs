use crate::modules::clocks::core::clock::Clock;
use crate::shared::infrastructure::clock_store::ClockStore;
use crate::shared::infrastructure::clock_store::in_memory::InMemoryClockStore;
use std::sync::Arc;

pub async fn store_with(clock: Clock) -> Arc<InMemoryClockStore> {
    let store = InMemoryClockStore::new();
    store.create(clock).await.expect("seeding the store failed");
    Arc::new(store)
}
